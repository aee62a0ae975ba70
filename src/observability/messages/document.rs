// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for document load and persist events.
//!
//! This module contains message types for logging events related to:
//! * Reading and parsing the target JSON document
//! * Writing the mutated document back to disk
//! * Skipped writes during dry runs

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Document read and parsed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::document::DocumentLoaded;
///
/// let msg = DocumentLoaded {
///     path: "js/data/century1.json",
///     records: 100,
///     size_bytes: 48_000,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DocumentLoaded<'a> {
    pub path: &'a str,
    pub records: usize,
    pub size_bytes: usize,
}

impl Display for DocumentLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded document {}: {} records ({} bytes)",
            self.path, self.records, self.size_bytes
        )
    }
}

impl StructuredLog for DocumentLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            records = self.records,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }
}

/// Document could not be read or parsed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::document::DocumentLoadFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
/// let msg = DocumentLoadFailed {
///     path: "js/data/missing.json",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DocumentLoadFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DocumentLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load document {}: {}", self.path, self.error)
    }
}

/// Mutated document written to disk.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::document::DocumentPersisted;
///
/// let msg = DocumentPersisted {
///     path: "js/data/century1.json",
///     size_bytes: 52_000,
///     write_mode: "atomic",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DocumentPersisted<'a> {
    pub path: &'a str,
    pub size_bytes: usize,
    pub write_mode: &'a str,
}

impl Display for DocumentPersisted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote document {} ({} bytes, {} write)",
            self.path, self.size_bytes, self.write_mode
        )
    }
}

impl StructuredLog for DocumentPersisted<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            size_bytes = self.size_bytes,
            write_mode = self.write_mode,
            "{}", self
        );
    }
}

/// Writing the mutated document failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DocumentPersistFailed<'a> {
    pub path: &'a str,
    pub write_mode: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DocumentPersistFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to write document {} ({} write): {}",
            self.path, self.write_mode, self.error
        )
    }
}

impl StructuredLog for DocumentPersistFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            write_mode = self.write_mode,
            error = %self.error,
            "{}", self
        );
    }
}

/// Write skipped because the run is a dry run.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PersistSkipped<'a> {
    pub path: &'a str,
}

impl Display for PersistSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dry run: {} left unchanged", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_loaded_display() {
        let msg = DocumentLoaded {
            path: "c1.json",
            records: 3,
            size_bytes: 120,
        };
        assert_eq!(msg.to_string(), "Loaded document c1.json: 3 records (120 bytes)");
    }

    #[test]
    fn test_persist_failed_display_includes_error() {
        let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let msg = DocumentPersistFailed {
            path: "c1.json",
            write_mode: "in_place",
            error: &error,
        };
        assert_eq!(
            msg.to_string(),
            "Failed to write document c1.json (in_place write): denied"
        );
    }
}
