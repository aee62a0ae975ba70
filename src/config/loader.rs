// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_FIELD_NAME, DEFAULT_FIELD_VALUE, DEFAULT_INDENT, DEFAULT_TARGET_PATH,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a single field injection run.
///
/// Every field is optional in the YAML file; anything left out falls back to
/// the built-in defaults, which tag `js/data/century1.json` with the portrait image.
///
/// # Fields
/// * `target` - Path of the JSON document to rewrite
/// * `field` - Name of the field set on every record
/// * `value` - String value assigned to that field
/// * `indent` - Spaces per indentation level in the output
/// * `write_mode` - How the rewritten document reaches the disk
///
/// # Example
/// ```yaml
/// target: js/data/century2.json
/// field: image
/// value: Michel_de_Nostredame.jpg
/// indent: 4
/// write_mode: atomic
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectionConfig {
    pub target: PathBuf,
    pub field: String,
    pub value: String,
    pub indent: usize,
    pub write_mode: WriteMode,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET_PATH),
            field: DEFAULT_FIELD_NAME.to_string(),
            value: DEFAULT_FIELD_VALUE.to_string(),
            indent: DEFAULT_INDENT,
            write_mode: WriteMode::default(),
        }
    }
}

/// Strategy for writing the mutated document back to disk.
///
/// # Variants
/// * `Atomic` - Write a sibling temp file, then rename it over the target
/// * `InPlace` - Truncate and rewrite the target directly; a failed write can
///   leave it partially written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    #[default]
    Atomic,
    InPlace,
}

impl WriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Atomic => "atomic",
            WriteMode::InPlace => "in_place",
        }
    }
}

/// Load an injection config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<InjectionConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: InjectionConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(cfg)
}
