//! Builder for constructing drawing stores.

use crate::builder::error::BuildError;
use crate::config::StoreConfig;
use crate::core::{Color, Tool};
use crate::store::DrawingStore;
use stillwater::validation::Validation;

/// Builder for constructing drawing stores with a fluent API.
///
/// Starts from [`StoreConfig::default`]; every setter is optional.
#[derive(Clone, Debug, Default)]
pub struct DrawingStoreBuilder {
    config: StoreConfig,
}

impl DrawingStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tool(mut self, tool: Tool) -> Self {
        self.config.tool = tool;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.config.color = color;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.config.stroke_width = width;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.config.font_size = size;
        self
    }

    /// Keep at most `limit` undo snapshots.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Keep every undo snapshot.
    pub fn unbounded_history(mut self) -> Self {
        self.config.history_limit = None;
        self
    }

    /// Build the store.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<DrawingStore, BuildError> {
        match self.config.validate() {
            Validation::Success(()) => Ok(DrawingStore::from_config(&self.config)),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
