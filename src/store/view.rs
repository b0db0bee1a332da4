//! Read-only view handed to subscribers.

use crate::core::{DocumentState, ShapeHistory};
use chrono::{DateTime, Utc};
use std::ops::Deref;

/// Document state together with the history status a toolbar needs.
///
/// Dereferences to [`DocumentState`], so `view.shapes` and
/// `view.current_tool` read the document directly.
#[derive(Clone, Copy, Debug)]
pub struct StoreView<'a> {
    state: &'a DocumentState,
    history: &'a ShapeHistory,
}

impl<'a> StoreView<'a> {
    pub(crate) fn new(state: &'a DocumentState, history: &'a ShapeHistory) -> Self {
        Self { state, history }
    }

    pub fn state(&self) -> &'a DocumentState {
        self.state
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Time of the most recent add, undo or redo.
    pub fn last_change(&self) -> Option<DateTime<Utc>> {
        self.history.last_change()
    }
}

impl Deref for StoreView<'_> {
    type Target = DocumentState;

    fn deref(&self) -> &DocumentState {
        self.state
    }
}
