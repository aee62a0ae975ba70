// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through the message types in [`messages`]. Each
//! type implements `Display` so call sites never build log strings by hand.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::document` - Loading and persisting the JSON document
//! * `messages::injector` - Field injection over the quatrain records
//! * `messages::engine` - Pipeline stage transitions
//!
//! # Usage
//!
//! ```rust
//! use quatrain_tagger::observability::messages::document::DocumentLoadFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
//! let msg = DocumentLoadFailed {
//!     path: "js/data/century1.json",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```
//!
//! The binary installs a `tracing_subscriber` fmt layer writing to stderr; see
//! [`init_tracing`].

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to every
/// target. Output goes to stderr so stdout stays free for the run summary.
pub fn init_tracing(default_level: tracing::Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
