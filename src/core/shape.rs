//! Drawable shapes.
//!
//! A [`Shape`] is an immutable value once it has been added to a document:
//! its fields are private and only readable through accessors.

use super::color::Color;
use super::tool::Tool;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A position on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Unique identity of a shape, assigned when the shape is created.
///
/// Renderers can key cached geometry on it; two shapes with identical
/// geometry still have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Geometry of a shape, one variant per drawing tool.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// Freehand polyline
    Stroke { points: Vec<Point> },
    /// Rectangle from its top-left corner
    Rectangle { origin: Point, width: f32, height: f32 },
    Circle { center: Point, radius: f32 },
    Text {
        position: Point,
        content: String,
        font_size: f32,
    },
}

impl ShapeKind {
    /// The tool that produces this kind of shape.
    pub fn tool(&self) -> Tool {
        match self {
            Self::Stroke { .. } => Tool::Pencil,
            Self::Rectangle { .. } => Tool::Rectangle,
            Self::Circle { .. } => Tool::Circle,
            Self::Text { .. } => Tool::Text,
        }
    }
}

/// One drawn object: geometry plus style.
///
/// # Example
///
/// ```rust
/// use sketchstate::core::{Color, Point, Shape, ShapeKind, Tool};
///
/// let circle = Shape::new(
///     ShapeKind::Circle { center: Point::new(10.0, 10.0), radius: 4.0 },
///     Color::BLACK,
///     2.0,
/// );
/// assert_eq!(circle.tool(), Tool::Circle);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    color: Color,
    stroke_width: f32,
}

impl Shape {
    /// Create a shape with a fresh id.
    pub fn new(kind: ShapeKind, color: Color, stroke_width: f32) -> Self {
        Self {
            id: ShapeId::generate(),
            kind,
            color,
            stroke_width,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn tool(&self) -> Tool {
        self.kind.tool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> Shape {
        Shape::new(
            ShapeKind::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
            },
            Color::BLACK,
            2.0,
        )
    }

    #[test]
    fn every_shape_gets_a_distinct_id() {
        let a = circle();
        let b = circle();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn clones_keep_their_identity() {
        let a = circle();
        let copy = a.clone();
        assert_eq!(a.id(), copy.id());
        assert_eq!(a, copy);
    }

    #[test]
    fn kinds_map_to_their_tools() {
        let kinds = [
            (ShapeKind::Stroke { points: vec![] }, Tool::Pencil),
            (
                ShapeKind::Rectangle {
                    origin: Point::ORIGIN,
                    width: 1.0,
                    height: 1.0,
                },
                Tool::Rectangle,
            ),
            (
                ShapeKind::Circle {
                    center: Point::ORIGIN,
                    radius: 1.0,
                },
                Tool::Circle,
            ),
            (
                ShapeKind::Text {
                    position: Point::ORIGIN,
                    content: "hi".to_string(),
                    font_size: 16.0,
                },
                Tool::Text,
            ),
        ];

        for (kind, tool) in kinds {
            assert_eq!(kind.tool(), tool);
        }
    }

    #[test]
    fn accessors_return_construction_values() {
        let shape = Shape::new(
            ShapeKind::Stroke {
                points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            },
            Color::rgb(1, 2, 3),
            5.0,
        );

        assert_eq!(shape.color(), Color::rgb(1, 2, 3));
        assert_eq!(shape.stroke_width(), 5.0);
        assert_eq!(shape.tool(), Tool::Pencil);
        match shape.kind() {
            ShapeKind::Stroke { points } => assert_eq!(points.len(), 2),
            other => panic!("Expected stroke, got {other:?}"),
        }
    }
}
