//! Sketchstate: drawing-document state with linear undo/redo
//!
//! Sketchstate keeps the client-side state of a simple whiteboard: the
//! selected tool, colour and sizes, the list of drawn shapes, and a linear
//! undo/redo history over that list. A UI owns one
//! [`DrawingStore`](store::DrawingStore) per document and subscribes to it
//! to re-render.
//!
//! # Core Concepts
//!
//! - **Shapes**: immutable values with a closed set of kinds
//! - **History**: two snapshot stacks forming one timeline
//! - **Store**: atomic transitions over shapes and history, plus subscribers
//!
//! # Example
//!
//! ```rust
//! use sketchstate::core::{Point, ShapeKind, Tool};
//! use sketchstate::store::DrawingStore;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut store = DrawingStore::builder()
//!     .tool(Tool::Circle)
//!     .history_limit(50)
//!     .build()
//!     .unwrap();
//!
//! let renders = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&renders);
//! store.subscribe(move |_state| counter.set(counter.get() + 1));
//!
//! let circle = store.styled_shape(ShapeKind::Circle {
//!     center: Point::new(40.0, 40.0),
//!     radius: 12.0,
//! });
//! store.add_shape(circle);
//! store.undo();
//! store.redo();
//!
//! assert_eq!(store.shapes().len(), 1);
//! assert_eq!(renders.get(), 4); // initial + add + undo + redo
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, DrawingStoreBuilder};
pub use config::StoreConfig;
pub use crate::core::{Color, DocumentState, HistoryError, Point, Shape, ShapeKind, Tool};
pub use store::{DrawingStore, StoreView};
