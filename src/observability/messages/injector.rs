// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for field injection events.
//!
//! This module contains message types for logging events related to:
//! * Injection start and completion, with per-outcome record counts
//! * Records that cannot carry the injected field

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Injection started over a loaded document.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::injector::InjectionStarted;
///
/// let msg = InjectionStarted {
///     processor: "field_injector",
///     field: "image",
///     records: 100,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct InjectionStarted<'a> {
    pub processor: &'a str,
    pub field: &'a str,
    pub records: usize,
}

impl Display for InjectionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' setting field '{}' on {} records",
            self.processor, self.field, self.records
        )
    }
}

impl StructuredLog for InjectionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            field = self.field,
            records = self.records,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "injection",
            span_name = name,
            processor = self.processor,
            field = self.field,
        )
    }
}

/// Injection finished on every record.
///
/// Overwritten records are counted, never warned about.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::injector::InjectionCompleted;
/// use std::time::Duration;
///
/// let msg = InjectionCompleted {
///     processor: "field_injector",
///     field: "image",
///     inserted: 98,
///     overwritten: 1,
///     unchanged: 1,
///     duration: Duration::from_micros(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InjectionCompleted<'a> {
    pub processor: &'a str,
    pub field: &'a str,
    pub inserted: usize,
    pub overwritten: usize,
    pub unchanged: usize,
    pub duration: std::time::Duration,
}

impl Display for InjectionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' set '{}': inserted={}, overwritten={}, unchanged={}, duration={:?}",
            self.processor, self.field, self.inserted, self.overwritten, self.unchanged, self.duration
        )
    }
}

impl StructuredLog for InjectionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor = self.processor,
            field = self.field,
            inserted = self.inserted,
            overwritten = self.overwritten,
            unchanged = self.unchanged,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}

/// A top-level entry is not an object and cannot take the field.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::injector::RecordRejected;
///
/// let msg = RecordRejected {
///     key: "12",
///     found: "string",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RecordRejected<'a> {
    pub key: &'a str,
    pub found: &'a str,
}

impl Display for RecordRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record '{}' is a {}, not an object; aborting before any write",
            self.key, self.found
        )
    }
}
