//! Bound: position and size of a laid-out element.

/// A point in layout coordinates.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (grows downward).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair. `(0, 0)` means "auto" (wrap content).
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// Auto size: derive from children or from the previous frame.
    pub const AUTO: Self = Self::new(0.0, 0.0);

    /// True when both dimensions are zero.
    #[inline]
    pub fn is_auto(&self) -> bool {
        self.w == 0.0 && self.h == 0.0
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from((w, h): (f32, f32)) -> Self {
        Self::new(w, h)
    }
}

/// Absolute position and size of an element.
///
/// `W`/`H` are non-negative once a layout pass has finalized them; a zero
/// size during accumulation means "not sized yet".
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Bound {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Bound {
    /// Create a new bound.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-sized bound at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Set the position.
    #[inline]
    pub fn offset(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size.
    #[inline]
    pub fn size(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
    }

    /// Reset the size to auto.
    #[inline]
    pub fn size_auto(&mut self) {
        self.size(0.0, 0.0);
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub const fn extent(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if a point lies inside the bound. Both edges are inclusive.
    #[inline]
    pub fn in_range(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

impl std::fmt::Debug for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bound({}, {} {}x{})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_inclusive_edges() {
        let b = Bound::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.in_range(Point::new(10.0, 10.0)));
        assert!(b.in_range(Point::new(0.0, 0.0)));
        assert!(b.in_range(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_in_range_outside() {
        let b = Bound::new(0.0, 0.0, 10.0, 10.0);
        assert!(!b.in_range(Point::new(10.01, 5.0)));
        assert!(!b.in_range(Point::new(5.0, -0.5)));
        assert!(!b.in_range(Point::new(-1.0, 11.0)));
    }

    #[test]
    fn test_offset_and_size() {
        let mut b = Bound::ZERO;
        b.offset(3.0, 4.0).size(20.0, 10.0);
        assert_eq!(b, Bound::new(3.0, 4.0, 20.0, 10.0));
        assert_eq!(b.right(), 23.0);
        assert_eq!(b.bottom(), 14.0);

        b.size_auto();
        assert!(b.extent().is_auto());
        assert_eq!(b.origin(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_from_tuples() {
        let b = Bound::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.in_range((2.0, 3.0).into()));
        assert_eq!(Size::from((4.0, 5.0)), Size::new(4.0, 5.0));
        assert!(Size::from((0.0, 0.0)).is_auto());
    }

    #[test]
    fn test_debug_format() {
        let b = Bound::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{b:?}"), "Bound(1, 2 3x4)");
    }
}
