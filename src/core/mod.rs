//! Core drawing-document types and history logic.
//!
//! This module contains the pure value types of a drawing document and
//! the undo/redo stacks:
//! - Tools, colours, points and shapes
//! - The document state handed to subscribers
//! - Snapshot-based linear history
//!
//! Nothing here notifies anyone; that is the job of
//! [`DrawingStore`](crate::store::DrawingStore).

mod color;
mod document;
mod error;
mod history;
mod shape;
mod tool;

pub use color::Color;
pub use document::{
    validate_font_size, validate_stroke_width, DocumentState, DEFAULT_FONT_SIZE,
    DEFAULT_STROKE_WIDTH,
};
pub use error::{HistoryError, SettingsError};
pub use history::{Direction, ShapeHistory, Snapshot};
pub use shape::{Point, Shape, ShapeId, ShapeKind};
pub use tool::Tool;
