// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quatrain_tagger::config::consts::TARGET_PATH_ENV;
use quatrain_tagger::config::{resolve_config, ConfigOverrides, WriteMode};
use quatrain_tagger::engine::{Pipeline, RunReport};
use quatrain_tagger::observability::init_tracing;
use quatrain_tagger::processors::FieldInjector;

/// Set a constant field on every record of a quatrain JSON document.
#[derive(Debug, Parser)]
#[command(name = "quatrain-tagger", version)]
struct Cli {
    /// JSON document to rewrite [default: js/data/century1.json]
    #[arg(env = TARGET_PATH_ENV)]
    path: Option<PathBuf>,

    /// YAML file with target, field, value, indent and write_mode
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field set on every record [default: image]
    #[arg(long)]
    field: Option<String>,

    /// Value assigned to the field [default: Michel_de_Nostredame.jpg]
    #[arg(long)]
    value: Option<String>,

    /// Spaces per indentation level [default: 4]
    #[arg(long)]
    indent: Option<usize>,

    /// Truncate and rewrite the file directly instead of temp file + rename
    #[arg(long)]
    in_place: bool,

    /// Load and mutate, report, but do not write
    #[arg(long)]
    dry_run: bool,

    /// Log pipeline stages and per-record details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target: self.path.clone(),
            field: self.field.clone(),
            value: self.value.clone(),
            indent: self.indent,
            write_mode: self.in_place.then_some(WriteMode::InPlace),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = resolve_config(cli.config.as_deref(), cli.overrides())
        .context("Invalid configuration")?;

    let injector = FieldInjector::from_config(&config);
    let report = Pipeline::new(&config)
        .dry_run(cli.dry_run)
        .run(&injector)
        .with_context(|| format!("Failed to tag {}", config.target.display()))?;

    print_summary(&report, &injector);
    Ok(())
}

fn print_summary(report: &RunReport, injector: &FieldInjector) {
    let summary = &report.summary;
    let action = if report.persisted() { "Tagged" } else { "Would tag" };
    println!(
        "{} {} records in {} with {}={:?} ({} inserted, {} overwritten, {} unchanged)",
        action,
        summary.records(),
        report.target.display(),
        injector.field(),
        injector.value(),
        summary.inserted,
        summary.overwritten,
        summary.unchanged,
    );
}
