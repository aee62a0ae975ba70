// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // injection config + defaults
pub mod document;   // in-memory document, load/persist
pub mod engine;     // load → mutate → persist pipeline
pub mod errors;     // error handling
pub mod observability;
pub mod processors; // document mutations
pub mod traits;     // processor seam

pub use engine::{inject_default_image, inject_field, Pipeline, PipelineStage, RunReport};
