//! Margin and padding: space reserved around or inside a box.

/// Space reserved around an element's box.
///
/// Counts toward the parent's accumulated size but not toward the element's own
/// width and height.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Margin {
    /// Space above.
    pub top: f32,
    /// Space to the left.
    pub left: f32,
    /// Space below.
    pub bottom: f32,
    /// Space to the right.
    pub right: f32,
}

impl Margin {
    /// Create a margin. Argument order is top, left, right, bottom.
    #[inline]
    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same margin on every side.
    #[inline]
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// No margin.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Left + right.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top + bottom.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Space reserved inside a group, between its edge and its children.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Padding {
    /// Inset from the left edge.
    pub left: f32,
    /// Inset from the right edge.
    pub right: f32,
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
}

impl Padding {
    /// Create padding. Argument order is top, left, right, bottom.
    #[inline]
    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Left + right.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top + bottom.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_argument_order() {
        let m = Margin::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.top, 1.0);
        assert_eq!(m.left, 2.0);
        assert_eq!(m.right, 3.0);
        assert_eq!(m.bottom, 4.0);
        assert_eq!(m.horizontal(), 5.0);
        assert_eq!(m.vertical(), 5.0);
    }

    #[test]
    fn test_padding_sums() {
        let p = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.horizontal(), 5.0);
        assert_eq!(p.vertical(), 5.0);
        assert_eq!(Padding::default().horizontal(), 0.0);
    }
}
