// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output. Types
//! that carry fields worth filtering on also implement [`StructuredLog`], which
//! emits the event with those fields attached and can open a matching span.
//!
//! # Organization
//!
//! * `document` - Document load and persist events
//! * `injector` - Field injection events
//! * `engine` - Pipeline lifecycle events
//!
//! # Usage Pattern
//!
//! ```rust
//! use quatrain_tagger::observability::messages::StructuredLog;
//! use quatrain_tagger::observability::messages::document::DocumentLoaded;
//!
//! let msg = DocumentLoaded {
//!     path: "js/data/century1.json",
//!     records: 100,
//!     size_bytes: 48_000,
//! };
//!
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod document;
pub mod engine;
pub mod injector;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a tracing event at its level.
    fn log(&self);

    /// Build a span carrying the same fields as the event.
    ///
    /// Messages that never open a span keep the default, a disabled span.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
