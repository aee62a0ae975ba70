// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod overrides;
mod validation;

pub mod consts;

pub use loader::{load_config, InjectionConfig, WriteMode};
pub use overrides::{resolve_config, ConfigOverrides};
pub use validation::validate_config;
