//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ByteSizeParseError;
use crate::domain::size::ByteSize;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub max_size: Option<String>,
    pub output_dir: Option<String>,
    pub overwrite: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            max_size: Some("4MiB".to_string()),
            output_dir: None,
            overwrite: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            max_size: other.max_size.or(self.max_size),
            output_dir: other.output_dir.or(self.output_dir),
            overwrite: other.overwrite.or(self.overwrite),
        }
    }

    /// Parse max_size, or 4 MiB if not set. An invalid string is an error.
    pub fn parsed_max_size(&self) -> Result<ByteSize, ByteSizeParseError> {
        match self.max_size.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ByteSize::default_max_size()),
        }
    }

    /// Get output directory, if configured
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Get overwrite setting, or false if not set
    pub fn overwrite_or_default(&self) -> bool {
        self.overwrite.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.max_size, Some("4MiB".to_string()));
        assert!(config.output_dir.is_none());
        assert_eq!(config.overwrite, Some(false));
        assert_eq!(config.parsed_max_size().unwrap(), ByteSize::from_mib(4));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.max_size.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.overwrite.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            max_size: Some("4MiB".to_string()),
            output_dir: Some("/tmp/base".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            max_size: Some("1MiB".to_string()),
            output_dir: None, // Should not override
            overwrite: Some(true),
        };

        let merged = base.merge(other);

        assert_eq!(merged.max_size, Some("1MiB".to_string()));
        assert_eq!(merged.output_dir, Some("/tmp/base".to_string()));
        assert_eq!(merged.overwrite, Some(true));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig::defaults();
        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged, base);
    }

    #[test]
    fn parsed_max_size_reads_value() {
        let config = AppConfig {
            max_size: Some("512KB".to_string()),
            ..Default::default()
        };
        assert_eq!(config.parsed_max_size().unwrap(), ByteSize::from_kib(512));
        assert_eq!(
            AppConfig::empty().parsed_max_size().unwrap(),
            ByteSize::default_max_size()
        );
    }

    #[test]
    fn parsed_max_size_rejects_invalid() {
        let config = AppConfig {
            max_size: Some("lots".to_string()),
            ..Default::default()
        };
        let err = config.parsed_max_size().unwrap_err();
        assert_eq!(err.input, "lots");
    }

    #[test]
    fn empty_output_dir_is_unset() {
        let config = AppConfig {
            output_dir: Some(String::new()),
            ..Default::default()
        };
        assert!(config.output_dir().is_none());
    }

    #[test]
    fn boolean_defaults() {
        assert!(!AppConfig::empty().overwrite_or_default());
    }
}
