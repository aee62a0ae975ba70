// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{load_config, validate_config, InjectionConfig, WriteMode};
use crate::errors::ConfigError;
use std::path::{Path, PathBuf};

/// Values supplied on the command line or through the environment.
///
/// Each `Some` wins over whatever the config file (or the built-in default)
/// says; `None` leaves the underlying value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub target: Option<PathBuf>,
    pub field: Option<String>,
    pub value: Option<String>,
    pub indent: Option<usize>,
    pub write_mode: Option<WriteMode>,
}

impl ConfigOverrides {
    /// Layer these overrides on top of `base`.
    pub fn apply(self, base: InjectionConfig) -> InjectionConfig {
        InjectionConfig {
            target: self.target.unwrap_or(base.target),
            field: self.field.unwrap_or(base.field),
            value: self.value.unwrap_or(base.value),
            indent: self.indent.unwrap_or(base.indent),
            write_mode: self.write_mode.unwrap_or(base.write_mode),
        }
    }
}

/// Build the effective config: defaults, then the optional YAML file, then overrides.
///
/// Validation runs once on the merged result, so an override can repair a
/// value the file got wrong.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<InjectionConfig, ConfigError> {
    let base = match config_path {
        Some(path) => load_config(path)?,
        None => InjectionConfig::default(),
    };

    let cfg = overrides.apply(base);
    validate_config(&cfg).map_err(|errors| ConfigError::Invalid { errors })?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let cfg = resolve_config(None, ConfigOverrides::default()).unwrap();
        assert_eq!(cfg, InjectionConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"target: from_file.json\nfield: portrait\nindent: 2\n")
            .unwrap();

        let overrides = ConfigOverrides {
            target: Some(PathBuf::from("from_cli.json")),
            write_mode: Some(WriteMode::InPlace),
            ..ConfigOverrides::default()
        };

        let cfg = resolve_config(Some(temp_file.path()), overrides).unwrap();
        assert_eq!(cfg.target, PathBuf::from("from_cli.json"));
        assert_eq!(cfg.field, "portrait");
        assert_eq!(cfg.indent, 2);
        assert_eq!(cfg.write_mode, WriteMode::InPlace);
    }

    #[test]
    fn test_override_repairs_invalid_file_value() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"indent: 99\n").unwrap();

        let overrides = ConfigOverrides {
            indent: Some(4),
            ..ConfigOverrides::default()
        };
        let cfg = resolve_config(Some(temp_file.path()), overrides).unwrap();
        assert_eq!(cfg.indent, 4);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            field: Some(String::new()),
            ..ConfigOverrides::default()
        };
        match resolve_config(None, overrides) {
            Err(ConfigError::Invalid { errors }) => {
                assert_eq!(errors, vec![ValidationError::EmptyFieldName])
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }
}
