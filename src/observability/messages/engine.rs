// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Pipeline start with the effective target and write mode
//! * Stage transitions (Loaded → Mutated → Persisted)
//! * Pipeline completion and failure

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline started for a target document.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::engine::PipelineStarted;
///
/// let msg = PipelineStarted {
///     target: "js/data/century1.json",
///     processor: "field_injector",
///     write_mode: "atomic",
///     dry_run: false,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineStarted<'a> {
    pub target: &'a str,
    pub processor: &'a str,
    pub write_mode: &'a str,
    pub dry_run: bool,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} on {} ({} write{})",
            self.processor,
            self.target,
            self.write_mode,
            if self.dry_run { ", dry run" } else { "" }
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            target_path = self.target,
            processor = self.processor,
            write_mode = self.write_mode,
            dry_run = self.dry_run,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            target_path = self.target,
            processor = self.processor,
            dry_run = self.dry_run,
        )
    }
}

/// Pipeline reached a new stage.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct StageReached<'a> {
    pub stage: &'a str,
}

impl Display for StageReached<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline stage reached: {}", self.stage)
    }
}

/// Pipeline completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use quatrain_tagger::observability::messages::engine::PipelineCompleted;
/// use std::time::Duration;
///
/// let msg = PipelineCompleted {
///     final_stage: "persisted",
///     records: 100,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineCompleted<'a> {
    pub final_stage: &'a str,
    pub records: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline completed at stage {}: {} records in {:?}",
            self.final_stage, self.records, self.duration
        )
    }
}

/// Pipeline aborted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineFailed<'a> {
    pub stage: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline failed after stage {}: {}", self.stage, self.error)
    }
}

impl StructuredLog for PipelineFailed<'_> {
    fn log(&self) {
        tracing::error!(
            stage = self.stage,
            error = %self.error,
            "{}", self
        );
    }
}
