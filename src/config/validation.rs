//! Configuration validation for injection runs.
//!
//! Checks run independently and accumulate, so a config with several problems
//! reports all of them at once rather than one per attempt.
//!
//! # Examples
//!
//! ```rust
//! use quatrain_tagger::config::{validate_config, InjectionConfig};
//! use quatrain_tagger::errors::ValidationError;
//!
//! let config = InjectionConfig {
//!     field: String::new(),
//!     ..InjectionConfig::default()
//! };
//!
//! match validate_config(&config) {
//!     Ok(()) => println!("Configuration is valid"),
//!     Err(errors) => assert_eq!(errors, vec![ValidationError::EmptyFieldName]),
//! }
//! ```

use crate::config::consts::{MAX_INDENT, MIN_INDENT};
use crate::config::InjectionConfig;
use crate::errors::ValidationError;

/// Validates an injection config before any file is touched.
///
/// # Returns
///
/// * `Ok(())` - The config can be used for a run
/// * `Err(Vec<ValidationError>)` - Every problem found, in check order
pub fn validate_config(config: &InjectionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.target.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyTargetPath);
    }

    if config.field.is_empty() {
        errors.push(ValidationError::EmptyFieldName);
    }

    if !(MIN_INDENT..=MAX_INDENT).contains(&config.indent) {
        errors.push(ValidationError::IndentOutOfRange {
            indent: config.indent,
            min: MIN_INDENT,
            max: MAX_INDENT,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&InjectionConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_field_name() {
        let config = InjectionConfig {
            field: String::new(),
            ..InjectionConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyFieldName])
        );
    }

    #[test]
    fn test_empty_target_path() {
        let config = InjectionConfig {
            target: PathBuf::new(),
            ..InjectionConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyTargetPath])
        );
    }

    #[test]
    fn test_indent_bounds() {
        for indent in [MIN_INDENT, MAX_INDENT] {
            let config = InjectionConfig {
                indent,
                ..InjectionConfig::default()
            };
            assert!(validate_config(&config).is_ok(), "indent {} rejected", indent);
        }

        let config = InjectionConfig {
            indent: MAX_INDENT + 1,
            ..InjectionConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::IndentOutOfRange {
                indent: MAX_INDENT + 1,
                min: MIN_INDENT,
                max: MAX_INDENT,
            }])
        );
    }

    #[test]
    fn test_multiple_errors() {
        let config = InjectionConfig {
            target: PathBuf::new(),
            field: String::new(),
            value: "x.jpg".to_string(),
            indent: 0,
            ..InjectionConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ValidationError::EmptyTargetPath);
        assert_eq!(errors[1], ValidationError::EmptyFieldName);
    }
}
