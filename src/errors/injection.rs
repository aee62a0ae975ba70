// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the load → inject → persist cycle.
//!
//! Every failure aborts the run. Load and type errors are raised before any
//! byte is written, so the target document is left untouched in those cases.

use std::path::PathBuf;
use thiserror::Error;

use super::ConfigError;

/// Error type for all document operations.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The target document does not exist.
    #[error("Document not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The target document exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed JSON.
    #[error("Failed to parse document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is valid JSON but not an object.
    #[error("Document root in {} must be an object, found {found}", .path.display())]
    RootNotObject { path: PathBuf, found: &'static str },

    /// A top-level entry is not an object, so no field can be assigned on it.
    #[error("Record '{key}' must be an object, found {found}")]
    RecordNotObject { key: String, found: &'static str },

    /// The mutated document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The injection config was rejected before the document was opened.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the mutated document failed after a successful read.
    #[error("Failed to write document {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type for functions returning `Result<T, InjectError>`.
pub type InjectResult<T> = Result<T, InjectError>;
