//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder that validates every setting
//! before a store is created.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::DrawingStoreBuilder;
