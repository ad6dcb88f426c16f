//! Geometry primitives shared by the element store and the layout manager.
//!
//! All coordinates use a top-left origin with Y growing downward:
//!
//! ```text
//! (0, 0)
//!  +-------------------------+ (w, 0)
//!  |  (x, y)                 |
//!  |   +------> W            |
//!  |   |                     |
//!  | H V                     |
//!  +-------------------------+
//! (0, h)                       (w, h)
//! ```

mod bound;
mod gravity;
mod spacing;

pub use bound::{Bound, Point, Size};
pub use gravity::Gravity;
pub use spacing::{Margin, Padding};
