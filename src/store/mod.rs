//! The drawing store: document state, history and subscribers in one unit.
//!
//! [`DrawingStore`] is the "imperative shell" around the pure
//! [`core`](crate::core) types. It owns the shape list together with both
//! history stacks, so every operation is a single atomic transition over
//! all three, and it notifies subscribers once that transition is done.
//!
//! # Key Concepts
//!
//! - **History**: `add_shape`, `undo` and `redo` move along one timeline
//! - **Settings**: tool, colour and sizes change without touching history
//! - **Subscribers**: callbacks that receive the full state, including
//!   whether undo and redo are available, after each change

mod subscribers;
mod view;

pub use subscribers::{Subscriber, SubscriptionId};
pub use view::StoreView;

use crate::builder::DrawingStoreBuilder;
use crate::config::StoreConfig;
use crate::core::{
    validate_font_size, validate_stroke_width, Color, DocumentState, HistoryError, Point,
    SettingsError, Shape, ShapeHistory, ShapeId, ShapeKind, Tool,
};
use log::debug;
use subscribers::Subscribers;

/// State container for one drawing document.
///
/// Each window or canvas owns its own store; there is no shared instance.
///
/// # Example
///
/// ```rust
/// use sketchstate::core::{Color, Point, Shape, ShapeKind};
/// use sketchstate::store::DrawingStore;
///
/// let mut store = DrawingStore::new();
/// let rect = Shape::new(
///     ShapeKind::Rectangle { origin: Point::new(0.0, 0.0), width: 10.0, height: 5.0 },
///     Color::BLACK,
///     2.0,
/// );
///
/// store.add_shape(rect);
/// assert_eq!(store.shapes().len(), 1);
///
/// assert!(store.undo());
/// assert!(store.shapes().is_empty());
///
/// assert!(store.redo());
/// assert_eq!(store.shapes().len(), 1);
/// ```
#[derive(Debug)]
pub struct DrawingStore {
    state: DocumentState,
    history: ShapeHistory,
    subscribers: Subscribers,
}

impl Default for DrawingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingStore {
    /// Create a store with default settings.
    pub fn new() -> Self {
        Self::from_config(&StoreConfig::default())
    }

    /// Start building a store with custom settings.
    pub fn builder() -> DrawingStoreBuilder {
        DrawingStoreBuilder::new()
    }

    /// Create a store from an already validated config.
    pub(crate) fn from_config(config: &StoreConfig) -> Self {
        Self {
            state: config.initial_state(),
            history: ShapeHistory::with_limit(config.history_limit()),
            subscribers: Subscribers::default(),
        }
    }

    /// Current document state (pure)
    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// Current shapes in z-order (pure)
    pub fn shapes(&self) -> &[Shape] {
        &self.state.shapes
    }

    /// Undo/redo stacks (pure)
    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }

    /// The same view subscribers receive (pure)
    pub fn view(&self) -> StoreView<'_> {
        StoreView::new(&self.state, &self.history)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Append a shape on top of the document.
    ///
    /// The previous shape list becomes undoable and any redo path is
    /// discarded. Returns the id of the added shape.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        let tool = shape.tool();
        self.history.record(&self.state.shapes);
        self.state.shapes.push(shape);
        debug!(
            "added {} shape {} (shapes: {}, undo: {}, redo: {})",
            tool,
            id,
            self.state.shapes.len(),
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.notify();
        id
    }

    /// Revert the most recent shape change.
    ///
    /// Returns `false` without changing anything (and without notifying)
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(()) => true,
            Err(err) => {
                debug!("{err}, ignoring");
                false
            }
        }
    }

    /// Re-apply the most recently undone change.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.try_redo() {
            Ok(()) => true,
            Err(err) => {
                debug!("{err}, ignoring");
                false
            }
        }
    }

    /// Like [`undo`](Self::undo), but reports an empty history as an error.
    pub fn try_undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.state.shapes)?;
        debug!(
            "undo (shapes: {}, undo: {}, redo: {})",
            self.state.shapes.len(),
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.notify();
        Ok(())
    }

    /// Like [`redo`](Self::redo), but reports an empty history as an error.
    pub fn try_redo(&mut self) -> Result<(), HistoryError> {
        self.history.redo(&mut self.state.shapes)?;
        debug!(
            "redo (shapes: {}, undo: {}, redo: {})",
            self.state.shapes.len(),
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.notify();
        Ok(())
    }

    /// Forget all undo and redo snapshots, keeping the current shapes.
    ///
    /// Subscribers are notified only if snapshots were dropped.
    pub fn clear_history(&mut self) {
        if self.history.clear() {
            debug!("history cleared");
            self.notify();
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.state.current_tool != tool {
            self.state.current_tool = tool;
            self.notify();
        }
    }

    pub fn set_color(&mut self, color: Color) {
        if self.state.current_color != color {
            self.state.current_color = color;
            self.notify();
        }
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), SettingsError> {
        let width = validate_stroke_width(width)?;
        if self.state.stroke_width != width {
            self.state.stroke_width = width;
            self.notify();
        }
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f32) -> Result<(), SettingsError> {
        let size = validate_font_size(size)?;
        if self.state.font_size != size {
            self.state.font_size = size;
            self.notify();
        }
        Ok(())
    }

    /// Mark the start of a pointer gesture at `pos`.
    pub fn begin_drawing(&mut self, pos: Point) {
        self.state.is_drawing = true;
        self.state.start_pos = pos;
        self.notify();
    }

    /// Mark the end of the current gesture. Returns `false` if none was active.
    pub fn end_drawing(&mut self) -> bool {
        if !self.state.is_drawing {
            return false;
        }
        self.state.is_drawing = false;
        self.notify();
        true
    }

    /// Replace the text buffer for the next text shape.
    pub fn set_current_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.state.current_text != text {
            self.state.current_text = text;
            self.notify();
        }
    }

    /// Turn the text buffer into a text shape at `position`.
    ///
    /// The shape uses the current colour, stroke width and font size, and
    /// the buffer is cleared. Blank text is left alone and `None` is
    /// returned.
    pub fn commit_text(&mut self, position: Point) -> Option<ShapeId> {
        if self.state.current_text.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.state.current_text);
        let shape = Shape::new(
            ShapeKind::Text {
                position,
                content,
                font_size: self.state.font_size,
            },
            self.state.current_color,
            self.state.stroke_width,
        );
        Some(self.add_shape(shape))
    }

    /// Build a shape styled with the current colour and stroke width.
    pub fn styled_shape(&self, kind: ShapeKind) -> Shape {
        Shape::new(kind, self.state.current_color, self.state.stroke_width)
    }

    /// Register a callback that receives the full state now and after
    /// every change.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&StoreView<'_>) + 'static,
    {
        let view = StoreView::new(&self.state, &self.history);
        self.subscribers.subscribe(Box::new(subscriber), view)
    }

    /// Remove a subscriber. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let view = StoreView::new(&self.state, &self.history);
        self.subscribers.notify(view);
    }
}
