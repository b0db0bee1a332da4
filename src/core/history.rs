//! Linear undo/redo history over shape lists.
//!
//! The history is a pair of snapshot stacks that together model a single
//! timeline with a cursor: everything before the cursor is on the undo
//! stack, everything after it on the redo stack. Each operation checks its
//! precondition before touching either stack, so a failed operation leaves
//! the history and the caller's shapes exactly as they were.

use super::error::HistoryError;
use super::shape::Shape;
use chrono::{DateTime, Utc};
use log::debug;
use std::fmt;
use std::num::NonZeroUsize;

/// Which way through the timeline an operation moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Full copy of a shape list at one point in history.
#[derive(Clone, Debug)]
pub struct Snapshot {
    shapes: Vec<Shape>,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            taken_at: Utc::now(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// When the snapshot was captured.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

/// Undo and redo stacks for a shape list.
///
/// The history does not own the shape list itself; callers pass the
/// current shapes into each operation, and `undo`/`redo` swap them in
/// place.
///
/// # Example
///
/// ```rust
/// use sketchstate::core::{Color, Point, Shape, ShapeHistory, ShapeKind};
///
/// let dot = |x| Shape::new(
///     ShapeKind::Circle { center: Point::new(x, 0.0), radius: 1.0 },
///     Color::BLACK,
///     1.0,
/// );
///
/// let mut history = ShapeHistory::new();
/// let mut shapes = Vec::new();
///
/// history.record(&shapes);
/// shapes.push(dot(1.0));
///
/// history.undo(&mut shapes).unwrap();
/// assert!(shapes.is_empty());
///
/// history.redo(&mut shapes).unwrap();
/// assert_eq!(shapes.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShapeHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: Option<NonZeroUsize>,
}

impl ShapeHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` undo snapshots.
    ///
    /// `None` keeps every snapshot.
    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Record `current` as the state to return to on the next undo.
    ///
    /// Call this immediately before mutating the shape list. Recording a
    /// new state discards the redo path.
    pub fn record(&mut self, current: &[Shape]) {
        self.redo_stack.clear();
        self.undo_stack.push(Snapshot::new(current.to_vec()));
        self.trim();
    }

    /// Step back one snapshot, moving `current` onto the redo stack.
    pub fn undo(&mut self, current: &mut Vec<Shape>) -> Result<(), HistoryError> {
        let previous = self.undo_stack.pop().ok_or(HistoryError::EmptyHistory {
            direction: Direction::Undo,
        })?;
        let replaced = std::mem::replace(current, previous.into_shapes());
        self.redo_stack.push(Snapshot::new(replaced));
        Ok(())
    }

    /// Step forward one snapshot, moving `current` onto the undo stack.
    pub fn redo(&mut self, current: &mut Vec<Shape>) -> Result<(), HistoryError> {
        let next = self.redo_stack.pop().ok_or(HistoryError::EmptyHistory {
            direction: Direction::Redo,
        })?;
        let replaced = std::mem::replace(current, next.into_shapes());
        self.undo_stack.push(Snapshot::new(replaced));
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshots available to undo, oldest first.
    pub fn undo_snapshots(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    /// Snapshots available to redo, the next redo last.
    pub fn redo_snapshots(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    /// When the most recent transition happened.
    ///
    /// Every record, undo and redo pushes exactly one fresh snapshot, so
    /// the newest top-of-stack timestamp is the time of the last change.
    pub fn last_change(&self) -> Option<DateTime<Utc>> {
        let undo_top = self.undo_stack.last().map(Snapshot::taken_at);
        let redo_top = self.redo_stack.last().map(Snapshot::taken_at);
        undo_top.max(redo_top)
    }

    /// Forget both stacks. Returns `false` if there was nothing to forget.
    pub fn clear(&mut self) -> bool {
        let had_snapshots = self.can_undo() || self.can_redo();
        self.undo_stack.clear();
        self.redo_stack.clear();
        had_snapshots
    }

    fn trim(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        let excess = self.undo_stack.len().saturating_sub(limit.get());
        if excess > 0 {
            self.undo_stack.drain(..excess);
            debug!(
                "history limit {} reached, dropped {} oldest snapshot(s)",
                limit, excess
            );
        }
    }
}
