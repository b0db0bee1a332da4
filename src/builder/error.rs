//! Build errors for the store builder.

use crate::config::{format_violations, ConfigViolation};
use thiserror::Error;

/// Errors that can occur when building a drawing store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid store settings: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
