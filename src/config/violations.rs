//! Configuration errors.

use crate::core::SettingsError;
use thiserror::Error;

/// A single problem found while validating a [`StoreConfig`](super::StoreConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error(transparent)]
    Setting(#[from] SettingsError),

    #[error("History limit must be at least 1 (use null for unbounded history)")]
    ZeroHistoryLimit,
}

/// Errors from loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first
    #[error("Invalid config: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

/// Join violations into one `; `-separated line.
pub(crate) fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
