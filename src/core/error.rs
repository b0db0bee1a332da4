//! Error types for history transitions and settings changes.

use super::history::Direction;
use thiserror::Error;

/// Errors from the strict history operations (`try_undo` / `try_redo`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    /// There is no snapshot to move to in the requested direction
    #[error("Nothing to {direction}")]
    EmptyHistory { direction: Direction },
}

/// Errors from rejected tool or style settings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Stroke width must be a positive finite number (got {0})")]
    InvalidStrokeWidth(f32),

    #[error("Font size must be a positive finite number (got {0})")]
    InvalidFontSize(f32),

    #[error("Invalid color {input:?}: expected #rgb or #rrggbb")]
    InvalidColor { input: String },
}
