//! Document state seen by the toolbar and canvas.

use super::color::Color;
use super::error::SettingsError;
use super::shape::{Point, Shape};
use super::tool::Tool;

pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Full state of one drawing document.
///
/// Subscribers receive this after every change. Only
/// [`DrawingStore`](crate::store::DrawingStore) mutates it, so that the
/// shape list and the history stacks always move together.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentState {
    pub current_tool: Tool,
    pub current_color: Color,
    pub stroke_width: f32,
    /// Drawn shapes in z-order, bottom first
    pub shapes: Vec<Shape>,
    /// Whether a pointer gesture is in progress
    pub is_drawing: bool,
    /// Where the in-progress gesture started
    pub start_pos: Point,
    /// Text typed for the next text shape
    pub current_text: String,
    pub font_size: f32,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            current_tool: Tool::default(),
            current_color: Color::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            shapes: Vec::new(),
            is_drawing: false,
            start_pos: Point::ORIGIN,
            current_text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

pub fn validate_stroke_width(width: f32) -> Result<f32, SettingsError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(SettingsError::InvalidStrokeWidth(width))
    }
}

pub fn validate_font_size(size: f32) -> Result<f32, SettingsError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(SettingsError::InvalidFontSize(size))
    }
}
