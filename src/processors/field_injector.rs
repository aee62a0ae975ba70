// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::time::Instant;

use crate::config::consts::{DEFAULT_FIELD_NAME, DEFAULT_FIELD_VALUE};
use crate::config::InjectionConfig;
use crate::document::{json_type_name, Document};
use crate::errors::{InjectError, InjectResult};
use crate::observability::messages::{injector::*, StructuredLog};
use crate::traits::{DocumentProcessor, ProcessSummary};

/// Field Injector processor - sets one string field on every quatrain record
///
/// An existing value under the same field is replaced without warning, and
/// records that already carry the value are assigned again rather than
/// skipped. Running it twice gives the same document as running it once.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInjector {
    field: String,
    value: String,
}

impl FieldInjector {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn from_config(config: &InjectionConfig) -> Self {
        Self::new(config.field.clone(), config.value.clone())
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for FieldInjector {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_NAME, DEFAULT_FIELD_VALUE)
    }
}

impl DocumentProcessor for FieldInjector {
    fn process(&self, document: &mut Document) -> InjectResult<ProcessSummary> {
        let start_msg = InjectionStarted {
            processor: self.name(),
            field: &self.field,
            records: document.len(),
        };

        let span = start_msg.span("field_injection");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        // Type-check every record up front so a bad entry leaves the document untouched.
        if let Some((key, record)) = document
            .records()
            .iter()
            .find(|(_, record)| !record.is_object())
        {
            let found = json_type_name(record);
            tracing::error!("{}", RecordRejected { key, found });
            return Err(InjectError::RecordNotObject {
                key: key.clone(),
                found,
            });
        }

        let mut summary = ProcessSummary::default();

        for record in document.records_mut().values_mut() {
            let Some(fields) = record.as_object_mut() else {
                continue;
            };

            let replacement = Value::String(self.value.clone());
            match fields.insert(self.field.clone(), replacement) {
                None => summary.inserted += 1,
                Some(previous) if previous.as_str() == Some(self.value.as_str()) => {
                    summary.unchanged += 1
                }
                Some(_) => summary.overwritten += 1,
            }
        }

        InjectionCompleted {
            processor: self.name(),
            field: &self.field,
            inserted: summary.inserted,
            overwritten: summary.overwritten,
            unchanged: summary.unchanged,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(summary)
    }

    fn name(&self) -> &'static str {
        "field_injector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn document(value: Value) -> Document {
        Document::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_inserts_missing_field() {
        let mut doc = document(json!({"Q1": {"text": "foo"}}));

        let summary = FieldInjector::default().process(&mut doc).unwrap();

        assert_eq!(
            doc.into_value(),
            json!({"Q1": {"text": "foo", "image": "Michel_de_Nostredame.jpg"}})
        );
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.records(), 1);
    }

    #[test]
    fn test_overwrites_existing_field() {
        let mut doc = document(json!({"Q1": {"text": "foo", "image": "old.jpg"}}));

        let summary = FieldInjector::default().process(&mut doc).unwrap();

        let record = &doc.records()["Q1"];
        assert_eq!(record.as_object().unwrap().len(), 2);
        assert_eq!(record["image"], "Michel_de_Nostredame.jpg");
        assert_eq!(summary.overwritten, 1);
        assert_eq!(summary.inserted, 0);
    }

    #[test]
    fn test_overwrite_keeps_field_position() {
        let mut doc = document(json!({"Q1": {"image": "old.jpg", "text": "foo"}}));
        FieldInjector::default().process(&mut doc).unwrap();

        let fields: Vec<&str> = doc.records()["Q1"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(fields, vec!["image", "text"]);
    }

    #[test]
    fn test_non_string_existing_value_is_overwritten() {
        let mut doc = document(json!({"Q1": {"image": null}, "Q2": {"image": 7}}));
        let summary = FieldInjector::default().process(&mut doc).unwrap();
        assert_eq!(summary.overwritten, 2);
    }

    #[test]
    fn test_already_tagged_record_counted_unchanged() {
        let mut doc = document(json!({"Q1": {"image": "Michel_de_Nostredame.jpg"}}));
        let summary = FieldInjector::default().process(&mut doc).unwrap();
        assert_eq!(summary.unchanged, 1);
        assert!(summary.is_noop());
    }

    #[test]
    fn test_empty_document_is_noop() {
        let mut doc = Document::default();
        let summary = FieldInjector::default().process(&mut doc).unwrap();
        assert_eq!(summary, ProcessSummary::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut once = document(json!({
            "1": {"french": "a", "english": "b"},
            "2": {"french": "c", "image": "old.jpg"}
        }));
        FieldInjector::default().process(&mut once).unwrap();

        let mut twice = once.clone();
        let summary = FieldInjector::default().process(&mut twice).unwrap();

        assert_eq!(once, twice);
        assert_eq!(summary.unchanged, 2);
    }

    #[test]
    fn test_other_fields_and_key_order_preserved() {
        let mut doc = Document::parse(
            Path::new("century1.json"),
            r#"{"3": {"z": "1", "a": "2"}, "1": {"m": "3"}, "2": {}}"#,
        )
        .unwrap();
        FieldInjector::default().process(&mut doc).unwrap();

        let keys: Vec<&str> = doc.records().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);

        let first: Vec<&str> = doc.records()["3"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(first, vec!["z", "a", "image"]);
        assert_eq!(doc.records()["3"]["z"], "1");
        assert_eq!(doc.records()["1"]["m"], "3");
    }

    #[test]
    fn test_non_object_record_rejected_without_mutation() {
        let original = json!({"1": {"french": "a"}, "2": "not a record", "3": {}});
        let mut doc = document(original.clone());

        let result = FieldInjector::default().process(&mut doc);

        match result {
            Err(InjectError::RecordNotObject { key, found }) => {
                assert_eq!(key, "2");
                assert_eq!(found, "string");
            }
            other => panic!("Expected RecordNotObject, got {:?}", other),
        }
        assert_eq!(doc.into_value(), original);
    }

    #[test]
    fn test_custom_field_and_value() {
        let config = InjectionConfig {
            field: "portrait".to_string(),
            value: "nostradamus.png".to_string(),
            ..InjectionConfig::default()
        };
        let injector = FieldInjector::from_config(&config);
        let mut doc = document(json!({"1": {}}));

        injector.process(&mut doc).unwrap();

        assert_eq!(doc.into_value(), json!({"1": {"portrait": "nostradamus.png"}}));
        assert_eq!(injector.field(), "portrait");
        assert_eq!(injector.value(), "nostradamus.png");
    }
}
