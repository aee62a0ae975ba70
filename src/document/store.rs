// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reading and writing quatrain documents on disk.
//!
//! The whole file is read and parsed before anything is written, so a missing
//! or malformed document never causes a write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::Document;
use crate::config::WriteMode;
use crate::errors::{InjectError, InjectResult};
use crate::observability::messages::document::{
    DocumentLoadFailed, DocumentLoaded, DocumentPersistFailed, DocumentPersisted,
};
use crate::observability::messages::StructuredLog;

impl Document {
    /// Read and parse the document at `path`.
    ///
    /// # Returns
    /// * `Ok(Document)` - The parsed root object
    /// * `Err(InjectError)` - `FileNotFound`, `Read`, `Parse` or `RootNotObject`
    pub fn load<P: AsRef<Path>>(path: P) -> InjectResult<Self> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        let text = fs::read_to_string(path).map_err(|source| {
            let error = if source.kind() == io::ErrorKind::NotFound {
                InjectError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                InjectError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            };
            tracing::error!(
                "{}",
                DocumentLoadFailed {
                    path: &display_path,
                    error: &error,
                }
            );
            error
        })?;

        let document = Document::parse(path, &text).map_err(|error| {
            tracing::error!(
                "{}",
                DocumentLoadFailed {
                    path: &display_path,
                    error: &error,
                }
            );
            error
        })?;

        DocumentLoaded {
            path: &display_path,
            records: document.len(),
            size_bytes: text.len(),
        }
        .log();

        Ok(document)
    }

    /// Serialize and write the document to `path`, returning the bytes written.
    ///
    /// `WriteMode::Atomic` writes a temp file next to `path` and renames it
    /// over the target, carrying over the target's permissions. A symlinked
    /// target is resolved first so the link survives and its file is updated.
    /// `WriteMode::InPlace` truncates and rewrites `path` directly.
    pub fn persist<P: AsRef<Path>>(
        &self,
        path: P,
        indent: usize,
        write_mode: WriteMode,
    ) -> InjectResult<usize> {
        let path = path.as_ref();
        let bytes = self.to_pretty_bytes(indent)?;

        let result = match write_mode {
            WriteMode::InPlace => fs::write(path, &bytes),
            WriteMode::Atomic => write_atomic(path, &bytes),
        };

        let display_path = path.display().to_string();
        if let Err(source) = result {
            let error = InjectError::Write {
                path: path.to_path_buf(),
                source,
            };
            DocumentPersistFailed {
                path: &display_path,
                write_mode: write_mode.as_str(),
                error: &error,
            }
            .log();
            return Err(error);
        }

        DocumentPersisted {
            path: &display_path,
            size_bytes: bytes.len(),
            write_mode: write_mode.as_str(),
        }
        .log();

        Ok(bytes.len())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    // Write through symlinks: replace the file the link points at, not the link.
    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e),
    };
    let path = resolved.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;

    // NamedTempFile is created 0600; keep the target's mode across the rename.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())?;
    }

    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
