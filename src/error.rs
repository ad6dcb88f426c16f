//! Layout error types.

use thiserror::Error;

/// Errors reported outside the per-element hot path.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Spacing must be finite and non-negative.
    #[error("invalid spacing: {0}")]
    InvalidSpacing(f32),

    /// Groups were still open when the frame ended.
    #[error("{depth} layout group(s) left open at end of frame")]
    UnclosedGroups {
        /// Number of groups above the root.
        depth: usize,
    },
}
