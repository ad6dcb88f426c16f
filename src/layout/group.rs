//! Group: the live state of one open container.

use crate::element::ElementId;
use crate::geometry::{Bound, Gravity, Padding, Point, Size};

/// How a group arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutType {
    /// Left to right: widths add up, height is the tallest child.
    Horizontal,
    /// Top to bottom: heights add up, width is the widest child.
    Vertical,
    /// Every child at the same origin: the group is as big as its largest child.
    #[default]
    Overlay,
}

impl LayoutType {
    /// Fold a child's footprint into a group's accumulated size.
    #[inline]
    pub fn extend(self, size: &mut Size, footprint: Size) {
        match self {
            Self::Horizontal => {
                size.w += footprint.w;
                size.h = size.h.max(footprint.h);
            }
            Self::Vertical => {
                size.w = size.w.max(footprint.w);
                size.h += footprint.h;
            }
            Self::Overlay => {
                size.w = size.w.max(footprint.w);
                size.h = size.h.max(footprint.h);
            }
        }
    }

    /// Step the cursor past a child's footprint.
    #[inline]
    pub fn advance(self, cursor: &mut Point, footprint: Size) {
        match self {
            Self::Horizontal => cursor.x += footprint.w,
            Self::Vertical => cursor.y += footprint.h,
            Self::Overlay => {}
        }
    }

    /// Which axes gravity applies to, as `(x, y)`.
    ///
    /// Flow containers only align on the cross axis.
    #[inline]
    pub const fn gravity_axes(self) -> (bool, bool) {
        match self {
            Self::Horizontal => (false, true),
            Self::Vertical => (true, false),
            Self::Overlay => (true, true),
        }
    }
}

/// One open container on the group stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group {
    /// Arrangement of the children.
    pub layout_type: LayoutType,
    /// Identifier of the backing element; `None` for the root.
    pub id: Option<ElementId>,
    /// Absolute position, plus the explicit size when `has_size` is set.
    pub bound: Bound,
    /// Size accumulated from the children placed so far.
    pub size: Size,
    /// Cursor stashed while a child group is open.
    pub cursor: Point,
    /// Shift applied to the children's origin.
    pub offset: Point,
    /// Inset between the group's edge and its children.
    pub padding: Padding,
    /// Default gravity for the children.
    pub gravity: Gravity,
    /// The caller fixed the size explicitly.
    pub has_size: bool,
    /// Size the group had when last finalized, used for alignment.
    pub previous: Size,
    pub(crate) slot: Option<usize>,
}

impl Group {
    /// An empty group anchored at `origin`.
    pub fn new(layout_type: LayoutType, id: Option<ElementId>, origin: Point) -> Self {
        Self {
            layout_type,
            id,
            bound: Bound::new(origin.x, origin.y, 0.0, 0.0),
            size: Size::AUTO,
            cursor: Point::ZERO,
            offset: Point::ZERO,
            padding: Padding::default(),
            gravity: Gravity::START,
            has_size: false,
            previous: Size::AUTO,
            slot: None,
        }
    }

    /// The root group: an overlay at the origin with no backing element.
    pub fn root() -> Self {
        Self::new(LayoutType::Overlay, None, Point::ZERO)
    }

    /// Fix the group's size.
    pub fn set_size(&mut self, w: f32, h: f32) {
        self.bound.size(w, h);
        self.has_size = true;
    }

    /// Absolute position the cursor is relative to.
    #[inline]
    pub fn content_origin(&self) -> Point {
        Point::new(
            self.bound.x + self.padding.left + self.offset.x,
            self.bound.y + self.padding.top + self.offset.y,
        )
    }

    /// Space offered to children for alignment.
    ///
    /// Per axis: the explicit size if one was set, the previous frame's size
    /// otherwise, minus padding.
    pub fn available(&self) -> Size {
        let w = if self.has_size && self.bound.w != 0.0 {
            self.bound.w
        } else {
            self.previous.w
        };
        let h = if self.has_size && self.bound.h != 0.0 {
            self.bound.h
        } else {
            self.previous.h
        };
        Size::new(w - self.padding.horizontal(), h - self.padding.vertical())
    }

    /// Settle the group's size and return its bound.
    ///
    /// Per axis, an explicit non-zero size wins; otherwise the accumulated
    /// children size plus padding is used.
    pub fn finalize(&mut self) -> Bound {
        if !self.has_size || self.bound.w == 0.0 {
            self.bound.w = self.size.w + self.padding.horizontal();
        }
        if !self.has_size || self.bound.h == 0.0 {
            self.bound.h = self.size.h + self.padding.vertical();
        }
        self.bound
    }
}
