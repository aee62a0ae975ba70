// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Load → mutate → persist pipeline.
//!
//! A run walks the stages once, in order, with no retries:
//!
//! ```text
//! Pending ──load──▶ Loaded ──process──▶ Mutated ──persist──▶ Persisted
//! ```
//!
//! Any error aborts the run at the stage it happened in. Load and processing
//! errors happen before the write starts, so the target file is untouched.


use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{validate_config, InjectionConfig, WriteMode};
use crate::document::Document;
use crate::errors::{ConfigError, InjectResult};
use crate::observability::messages::engine::{
    PipelineCompleted, PipelineFailed, PipelineStarted, StageReached,
};
use crate::observability::messages::document::PersistSkipped;
use crate::observability::messages::StructuredLog;
use crate::processors::FieldInjector;
use crate::traits::{DocumentProcessor, ProcessSummary};

/// Stage a pipeline run has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Pending,
    Loaded,
    Mutated,
    Persisted,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Pending => "pending",
            PipelineStage::Loaded => "loaded",
            PipelineStage::Mutated => "mutated",
            PipelineStage::Persisted => "persisted",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub target: PathBuf,
    pub summary: ProcessSummary,
    /// `Mutated` for a dry run, `Persisted` otherwise
    pub final_stage: PipelineStage,
    /// Size of the rewritten document; `None` when nothing was written
    pub bytes_written: Option<usize>,
}

impl RunReport {
    pub fn persisted(&self) -> bool {
        self.final_stage == PipelineStage::Persisted
    }
}

/// Drives one document through a processor.
pub struct Pipeline {
    target: PathBuf,
    indent: usize,
    write_mode: WriteMode,
    dry_run: bool,
}

impl Pipeline {
    pub fn new(config: &InjectionConfig) -> Self {
        Self {
            target: config.target.clone(),
            indent: config.indent,
            write_mode: config.write_mode,
            dry_run: false,
        }
    }

    /// Stop after the Mutated stage and leave the file as it was.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, processor: &dyn DocumentProcessor) -> InjectResult<RunReport> {
        let target_display = self.target.display().to_string();
        let start_msg = PipelineStarted {
            target: &target_display,
            processor: processor.name(),
            write_mode: self.write_mode.as_str(),
            dry_run: self.dry_run,
        };

        let span = start_msg.span("pipeline_run");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut stage = PipelineStage::Pending;

        let result = self.run_stages(processor, &mut stage);

        match &result {
            Ok(report) => tracing::info!(
                "{}",
                PipelineCompleted {
                    final_stage: report.final_stage.as_str(),
                    records: report.summary.records(),
                    duration: start_time.elapsed(),
                }
            ),
            Err(error) => PipelineFailed {
                stage: stage.as_str(),
                error,
            }
            .log(),
        }

        result
    }

    fn run_stages(
        &self,
        processor: &dyn DocumentProcessor,
        stage: &mut PipelineStage,
    ) -> InjectResult<RunReport> {
        let mut document = Document::load(&self.target)?;
        advance(stage, PipelineStage::Loaded);

        let summary = processor.process(&mut document)?;
        advance(stage, PipelineStage::Mutated);

        if self.dry_run {
            tracing::info!(
                "{}",
                PersistSkipped {
                    path: &self.target.display().to_string(),
                }
            );
            return Ok(RunReport {
                target: self.target.clone(),
                summary,
                final_stage: *stage,
                bytes_written: None,
            });
        }

        let bytes_written = document.persist(&self.target, self.indent, self.write_mode)?;
        advance(stage, PipelineStage::Persisted);

        Ok(RunReport {
            target: self.target.clone(),
            summary,
            final_stage: *stage,
            bytes_written: Some(bytes_written),
        })
    }
}

fn advance(stage: &mut PipelineStage, next: PipelineStage) {
    *stage = next;
    tracing::debug!("{}", StageReached { stage: next.as_str() });
}

/// Validate `config`, then run the configured field injection on its target.
///
/// An invalid config fails with `InjectError::Config` before the target is read.
pub fn inject_field(config: &InjectionConfig) -> InjectResult<RunReport> {
    validate_config(config).map_err(|errors| ConfigError::Invalid { errors })?;
    Pipeline::new(config).run(&FieldInjector::from_config(config))
}

/// Tag every record in `path` with the default image, writing 4-space JSON.
pub fn inject_default_image<P: AsRef<Path>>(path: P) -> InjectResult<RunReport> {
    let config = InjectionConfig {
        target: path.as_ref().to_path_buf(),
        ..InjectionConfig::default()
    };
    inject_field(&config)
}
