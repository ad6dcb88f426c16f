//! # Cursor Layout
//!
//! An immediate-mode GUI layout engine.
//!
//! Each frame, client code opens and closes nested groups (rows, columns and
//! overlays) and places elements inside them. The engine returns absolute
//! bounds for every element without the client pre-computing any geometry.
//!
//! ## Core Concepts
//!
//! - **Cursor**: the draw position for the next child of the active group
//! - **Group stack**: one open container per nesting level, above a root overlay
//! - **Element store**: per-identifier bounds kept across frames, so auto-sized
//!   elements and alignment can use last frame's sizes
//!
//! ## Example
//!
//! ```rust
//! use cursor_layout::{ElementId, LayoutManager, LayoutType, Size};
//!
//! let mut layout = LayoutManager::new();
//! layout.begin_frame();
//! layout.push_layout(LayoutType::Horizontal, ElementId(0));
//! layout.place(ElementId(1), Size::new(10.0, 10.0));
//! layout.place(ElementId(2), Size::new(20.0, 10.0));
//! let row = layout.end_layout();
//! assert_eq!(row.w, 46.0);
//! layout.end_frame().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod element;
pub mod error;
pub mod geometry;
pub mod layout;

// Re-exports for convenience
pub use element::{Element, ElementId, ElementStore};
pub use error::LayoutError;
pub use geometry::{Bound, Gravity, Margin, Padding, Point, Size};
pub use layout::{Cursor, DirtyFlags, Group, LayoutConfig, LayoutManager, LayoutType, Placement};
