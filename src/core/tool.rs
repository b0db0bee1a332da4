//! Drawing tools selectable from the toolbar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tool used for the next shape the user draws.
///
/// The set is closed: every shape kind maps to exactly one tool, see
/// [`ShapeKind::tool`](crate::core::ShapeKind::tool).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand strokes
    #[default]
    Pencil,
    /// Axis-aligned rectangles
    Rectangle,
    /// Circles from a center and radius
    Circle,
    /// Text labels
    Text,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Pencil, Tool::Rectangle, Tool::Circle, Tool::Text];

    /// Display name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
