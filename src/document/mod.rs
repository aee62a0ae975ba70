// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory quatrain document.
//!
//! A document is the root JSON object of a century file: quatrain identifiers
//! mapped to records. Key order is preserved end to end (serde_json is built
//! with `preserve_order`), so a rewrite only differs from its input where a
//! record was actually changed. Numbers are kept as written
//! (`arbitrary_precision`), so integers wider than 64 bits survive a rewrite.

mod store;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::{InjectError, InjectResult};

/// Root object of a quatrain file, keyed by quatrain identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    records: Map<String, Value>,
}

impl Document {
    /// Wrap an already-parsed root object.
    pub fn new(records: Map<String, Value>) -> Self {
        Self { records }
    }

    /// Parse document text. `path` is only used for error reporting.
    pub fn parse(path: &Path, text: &str) -> InjectResult<Self> {
        let root: Value = serde_json::from_str(text).map_err(|source| InjectError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match root {
            Value::Object(records) => Ok(Self { records }),
            other => Err(InjectError::RootNotObject {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            }),
        }
    }

    pub fn records(&self) -> &Map<String, Value> {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.records)
    }

    /// Serialize with `indent` spaces per level.
    ///
    /// Non-ASCII characters are written as UTF-8, not `\u` escapes, and no
    /// trailing newline is added.
    pub fn to_pretty_bytes(&self, indent: usize) -> InjectResult<Vec<u8>> {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());

        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.records.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
