// Configuration validation

use crate::{ConfigError, Result};
use polyglot_i18n::LocaleCode;
use std::path::{Path, PathBuf};

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a path is not empty
    pub fn path_not_empty(value: &Path, field: &str) -> Result<()> {
        if value.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a list has at least one element
    pub fn list_not_empty<T>(value: &[T], field: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} must contain at least one entry",
                field
            )));
        }
        Ok(())
    }

    /// Validate a locale code
    pub fn is_locale_code(value: &str, field: &str) -> Result<()> {
        LocaleCode::parse(value).map_err(|e| {
            ConfigError::ValidationError(format!("{} is not a valid locale code: {}", field, e))
        })?;
        Ok(())
    }

    /// Validate a glob pattern
    pub fn is_glob(value: &str, field: &str) -> Result<()> {
        glob::Pattern::new(value).map_err(|e| {
            ConfigError::ValidationError(format!(
                "{} contains an invalid pattern '{}': {}",
                field, value, e
            ))
        })?;
        Ok(())
    }

    /// Validate that neither directory is, or lies inside, the other.
    ///
    /// Relative paths are compared after joining them onto the current
    /// directory.
    pub fn disjoint_paths(a: &Path, b: &Path, field_a: &str, field_b: &str) -> Result<()> {
        let a = absolute(a);
        let b = absolute(b);
        if a.starts_with(&b) || b.starts_with(&a) {
            return Err(ConfigError::ValidationError(format!(
                "{} ({}) and {} ({}) must not contain one another",
                field_a,
                a.display(),
                field_b,
                b.display()
            )));
        }
        Ok(())
    }
}
