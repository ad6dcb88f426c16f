//! Layout module: the cursor and group stack that position elements each frame.
//!
//! Client code opens groups, places elements and closes groups in strict
//! nesting order. Absolute bounds come out as a side effect; nothing is laid
//! out ahead of time.

mod config;
mod cursor;
mod group;
mod manager;

pub use config::LayoutConfig;
pub use cursor::{Cursor, DirtyFlags, Pending, Placement};
pub use group::{Group, LayoutType};
pub use manager::LayoutManager;
