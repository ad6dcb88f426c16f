//! Cursor: the live draw position plus the pending state for the next element.

use bitflags::bitflags;

use crate::geometry::{Gravity, Margin, Point, Size};

bitflags! {
    /// Which pending values were set explicitly for the next element.
    ///
    /// A missing flag means "use the layout default": zero margin, auto size,
    /// the group's gravity.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct DirtyFlags: u8 {
        /// An explicit size was set.
        const SIZE = 0b0000_0001;
        /// An explicit margin was set.
        const MARGIN = 0b0000_0010;
        /// An explicit gravity was set.
        const GRAVITY = 0b0000_0100;
    }
}

/// Options for the next placed element.
///
/// # Example
/// ```
/// use cursor_layout::{DirtyFlags, Margin, Placement};
/// let next = Placement::new().margin(Margin::uniform(2.0)).size(40.0, 12.0);
/// assert_eq!(next.flags(), DirtyFlags::MARGIN | DirtyFlags::SIZE);
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Placement {
    margin: Option<Margin>,
    size: Option<Size>,
    gravity: Option<Gravity>,
}

impl Placement {
    /// No explicit options.
    pub const fn new() -> Self {
        Self {
            margin: None,
            size: None,
            gravity: None,
        }
    }

    /// Set the margin.
    #[must_use]
    pub const fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set an explicit size. A zero dimension stays auto.
    #[must_use]
    pub const fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size::new(w, h));
        self
    }

    /// Set the gravity (clamped to `[0, 1]`).
    #[must_use]
    pub fn gravity(mut self, x: f32, y: f32) -> Self {
        self.gravity = Some(Gravity::new(x, y));
        self
    }

    /// Flags for the options that are set.
    pub fn flags(&self) -> DirtyFlags {
        let mut flags = DirtyFlags::empty();
        flags.set(DirtyFlags::MARGIN, self.margin.is_some());
        flags.set(DirtyFlags::SIZE, self.size.is_some());
        flags.set(DirtyFlags::GRAVITY, self.gravity.is_some());
        flags
    }
}

/// Pending values taken off the cursor when an element is placed.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Pending {
    /// Explicit margin, or zero.
    pub margin: Margin,
    /// Explicit size, or auto.
    pub size: Size,
    /// Explicit gravity, meaningful only with [`DirtyFlags::GRAVITY`].
    pub gravity: Gravity,
    /// Which of the above were set.
    pub flags: DirtyFlags,
}

/// The live draw position, relative to the active group's content origin.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Cursor {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    pending: Pending,
}

impl Cursor {
    /// Cursor at the local origin with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position.
    #[inline]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Set the margin of the next element. Argument order is top, left, right, bottom.
    pub fn set_margin(&mut self, top: f32, left: f32, right: f32, bottom: f32) -> &mut Self {
        self.pending.flags |= DirtyFlags::MARGIN;
        self.pending.margin = Margin::new(top, left, right, bottom);
        self
    }

    /// Set the size of the next element.
    pub fn set_size(&mut self, w: f32, h: f32) -> &mut Self {
        self.pending.flags |= DirtyFlags::SIZE;
        self.pending.size = Size::new(w, h);
        self
    }

    /// Set the gravity of the next element, clamped to `[0, 1]`.
    pub fn set_gravity(&mut self, x: f32, y: f32) -> &mut Self {
        self.pending.flags |= DirtyFlags::GRAVITY;
        self.pending.gravity = Gravity::new(x, y);
        self
    }

    /// Apply every option set in `placement`.
    pub fn configure(&mut self, placement: &Placement) -> &mut Self {
        if let Some(m) = placement.margin {
            self.set_margin(m.top, m.left, m.right, m.bottom);
        }
        if let Some(s) = placement.size {
            self.set_size(s.w, s.h);
        }
        if let Some(g) = placement.gravity {
            self.set_gravity(g.x, g.y);
        }
        self
    }

    /// Flags for the pending values.
    #[inline]
    pub const fn flags(&self) -> DirtyFlags {
        self.pending.flags
    }

    /// Read the pending values without clearing them.
    #[inline]
    pub const fn pending(&self) -> &Pending {
        &self.pending
    }

    /// Take the pending values, leaving defaults behind.
    #[inline]
    pub fn take_pending(&mut self) -> Pending {
        std::mem::take(&mut self.pending)
    }

    /// Clear pending state. The position is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.pending = Pending::default();
    }

    /// Move to `(x, y)` keeping pending state.
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_mark_flags() {
        let mut c = Cursor::new();
        assert!(c.flags().is_empty());

        c.set_margin(1.0, 2.0, 3.0, 4.0).set_size(10.0, 5.0);
        assert_eq!(c.flags(), DirtyFlags::MARGIN | DirtyFlags::SIZE);
        assert_eq!(c.pending().margin, Margin::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(c.pending().size, Size::new(10.0, 5.0));
    }

    #[test]
    fn test_gravity_clamped_on_set() {
        let mut c = Cursor::new();
        c.set_gravity(3.0, -2.0);
        assert_eq!(c.pending().gravity, Gravity::new(1.0, 0.0));
        assert!(c.flags().contains(DirtyFlags::GRAVITY));
    }

    #[test]
    fn test_take_pending_resets() {
        let mut c = Cursor::new();
        c.move_to(5.0, 6.0);
        c.configure(&Placement::new().gravity(0.5, 0.5));

        let p = c.take_pending();
        assert_eq!(p.flags, DirtyFlags::GRAVITY);
        assert!(c.flags().is_empty());
        assert_eq!(c.position(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_placement_flags() {
        assert!(Placement::new().flags().is_empty());
        let all = Placement::new()
            .margin(Margin::ZERO)
            .size(0.0, 0.0)
            .gravity(0.0, 0.0);
        assert_eq!(all.flags(), DirtyFlags::all());
    }
}
