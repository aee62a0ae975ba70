// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during injection config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The field to inject has an empty name
    EmptyFieldName,
    /// No target document path was configured
    EmptyTargetPath,
    /// The output indentation is outside the supported range
    IndentOutOfRange {
        /// The configured indentation width
        indent: usize,
        /// Smallest accepted width
        min: usize,
        /// Largest accepted width
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFieldName => {
                write!(f, "Field name must not be empty")
            }
            ValidationError::EmptyTargetPath => {
                write!(f, "Target document path must not be empty")
            }
            ValidationError::IndentOutOfRange { indent, min, max } => {
                write!(
                    f,
                    "Indent of {} spaces is out of range (expected {}..={})",
                    indent, min, max
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while loading an injection config file
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid YAML for an injection config
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// The config parsed but failed validation
    Invalid { errors: Vec<ValidationError> },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable { path, source } => {
                write!(f, "Failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Malformed { path, source } => {
                write!(f, "Failed to parse config '{}': {}", path.display(), source)
            }
            ConfigError::Invalid { errors } => {
                writeln!(f, "Configuration validation failed:")?;
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", messages.join("\n"))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Unreadable { source, .. } => Some(source),
            ConfigError::Malformed { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}
