//! Element module: per-identifier boxes persisted across frames.
//!
//! Records are appended once and never removed individually, so a record's
//! index stays valid until the whole store is cleared.

mod store;

pub use store::{Element, ElementId, ElementStore};
