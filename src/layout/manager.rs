//! LayoutManager: cursor, group stack and element store for one layout pass.
//!
//! # Frame flow
//!
//! ```text
//! begin_frame
//!   push_layout(Vertical, panel)          group anchored at cursor, cursor -> (0, 0)
//!     place(title, size)                  extend + advance
//!     push_layout(Horizontal, row)
//!       place_with(ok, size, &placement)
//!       place(cancel, size)
//!     end_layout                          row folds into panel like any child
//!   end_layout
//! end_frame
//! ```
//!
//! Sizes flow bottom-up through `extend`, positions flow top-down through
//! `advance`. Both always run as a pair for every placed element, so a
//! group's size and its children's positions stay consistent.

use super::config::LayoutConfig;
use super::cursor::{Cursor, DirtyFlags, Placement};
use super::group::{Group, LayoutType};
use crate::element::{Element, ElementId, ElementStore};
use crate::error::LayoutError;
use crate::geometry::{Bound, Gravity, Padding, Point, Size};

/// Immediate-mode layout state.
///
/// The root overlay group is always present, so the stack is never empty.
#[derive(Debug, Clone)]
pub struct LayoutManager {
    cursor: Cursor,
    elements: ElementStore,
    root: Group,
    groups: Vec<Group>,
    spacing: f32,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    /// Create a manager with the default configuration.
    pub fn new() -> Self {
        Self::build(LayoutConfig::default())
    }

    /// Create a manager with a custom configuration.
    pub fn with_config(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: LayoutConfig) -> Self {
        Self {
            cursor: Cursor::new(),
            elements: ElementStore::with_capacity(config.element_capacity),
            root: Group::root(),
            groups: Vec::with_capacity(config.group_capacity),
            spacing: config.spacing,
        }
    }

    /// Spacing added on each side of every element.
    #[inline]
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Number of open groups above the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// The live cursor.
    #[inline]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The live cursor, for chained configuration of the next element.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// The innermost open group (the root when none is open).
    #[inline]
    pub fn current_group(&self) -> &Group {
        self.groups.last().unwrap_or(&self.root)
    }

    #[inline]
    fn current_group_mut(&mut self) -> &mut Group {
        self.groups.last_mut().unwrap_or(&mut self.root)
    }

    /// The element store.
    #[inline]
    pub const fn elements(&self) -> &ElementStore {
        &self.elements
    }

    /// Append a zeroed record for `id`.
    pub fn new_element(&mut self, id: ElementId) -> &mut Element {
        self.elements.create(id)
    }

    /// Last computed bound of `id`.
    pub fn lookup(&self, id: ElementId) -> Option<Bound> {
        self.elements.lookup(id).map(|e| e.bound)
    }

    /// Last computed record of `id`.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.lookup(id)
    }

    /// Clear the element store. The group stack is left as is.
    pub fn reset(&mut self) {
        self.elements.clear();
    }

    fn slot_for(&mut self, id: ElementId) -> usize {
        match self.elements.position(id) {
            Some(slot) => slot,
            None => self.elements.create_slot(id),
        }
    }

    /// Set the margin of the next element. Argument order is top, left, right, bottom.
    pub fn set_margin(&mut self, top: f32, left: f32, right: f32, bottom: f32) -> &mut Self {
        self.cursor.set_margin(top, left, right, bottom);
        self
    }

    /// Set the size of the next element.
    pub fn set_size(&mut self, w: f32, h: f32) -> &mut Self {
        self.cursor.set_size(w, h);
        self
    }

    /// Set the gravity of the next element, clamped to `[0, 1]`.
    pub fn set_gravity(&mut self, x: f32, y: f32) -> &mut Self {
        self.cursor.set_gravity(x, y);
        self
    }

    /// Move the cursor to `(x, y)` in the current group.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.cursor.move_to(x, y);
        self
    }

    /// Shift the cursor by `(dx, dy)`.
    pub fn offset(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.cursor.x += dx;
        self.cursor.y += dy;
        self
    }

    /// Fix the current group's size. A zero dimension still wraps content.
    pub fn set_group_size(&mut self, w: f32, h: f32) -> &mut Self {
        self.current_group_mut().set_size(w, h);
        self
    }

    /// Default gravity for the current group's children, clamped to `[0, 1]`.
    pub fn set_group_gravity(&mut self, x: f32, y: f32) -> &mut Self {
        self.current_group_mut().gravity = Gravity::new(x, y);
        self
    }

    /// Inset the current group's children. Argument order is top, left, right, bottom.
    pub fn set_group_padding(&mut self, top: f32, left: f32, right: f32, bottom: f32) -> &mut Self {
        self.current_group_mut().padding = Padding::new(top, left, right, bottom);
        self
    }

    /// Shift the current group's children, e.g. for scrolled content.
    pub fn set_group_offset(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.current_group_mut().offset = Point::new(dx, dy);
        self
    }

    /// Fix the root group's size.
    pub fn set_viewport(&mut self, w: f32, h: f32) -> &mut Self {
        self.root.set_size(w, h);
        self
    }

    /// Open a group at the cursor.
    ///
    /// The group's record is created on first use. A pending explicit size
    /// becomes the group's size and a pending gravity aligns the group inside
    /// its parent, using the explicit size where set and the size it had last
    /// frame otherwise. A pending margin is dropped.
    pub fn push_layout(&mut self, layout_type: LayoutType, id: ElementId) {
        let pending = self.cursor.take_pending();
        let slot = self.slot_for(id);
        let previous = self
            .elements
            .get(slot)
            .map_or(Size::AUTO, |e| e.bound.extent());

        let at = self.cursor.position();
        let parent = self.current_group_mut();
        parent.cursor = at;

        // group(x, y) = parent origin + cursor
        let origin = parent.content_origin();
        let mut anchor = Point::new(origin.x + at.x, origin.y + at.y);

        let gravity = if pending.flags.contains(DirtyFlags::GRAVITY) {
            pending.gravity
        } else {
            parent.gravity
        };
        // a known explicit size beats last frame's size
        let explicit = if pending.flags.contains(DirtyFlags::SIZE) {
            pending.size
        } else {
            Size::AUTO
        };
        let extent = Size::new(
            resolve(explicit.w, 0.0, previous.w),
            resolve(explicit.h, 0.0, previous.h),
        );
        let available = parent.available();
        let (align_x, align_y) = parent.layout_type.gravity_axes();
        if align_x {
            anchor.x += Gravity::align(gravity.x, available.w - at.x, extent.w);
        }
        if align_y {
            anchor.y += Gravity::align(gravity.y, available.h - at.y, extent.h);
        }

        let mut group = Group::new(layout_type, Some(id), anchor);
        group.slot = Some(slot);
        group.previous = previous;
        if pending.flags.contains(DirtyFlags::SIZE) {
            group.set_size(pending.size.w, pending.size.h);
        }
        if let Some(e) = self.elements.get_mut(slot) {
            e.bound.offset(anchor.x, anchor.y);
        }

        self.groups.push(group);
        self.cursor.move_to(0.0, 0.0);
        tracing::trace!(depth = self.groups.len(), ?layout_type, ?id, ?anchor, "push layout");
    }

    /// Close the current group and fold it into its parent.
    ///
    /// Returns the group's finalized bound. The group then counts as one child
    /// of its parent: the parent's size grows and its cursor advances.
    ///
    /// Pending cursor state is cleared. With no group open, the root is
    /// finalized and returned and nothing else changes.
    pub fn end_layout(&mut self) -> Bound {
        let Some(mut group) = self.groups.pop() else {
            tracing::warn!("end_layout with no open group, finalizing root only");
            self.cursor.reset();
            return self.root.finalize();
        };

        let bound = group.finalize();
        if let Some(e) = group.slot.and_then(|slot| self.elements.get_mut(slot)) {
            // the store may have been reset while the group was open
            if Some(e.id) == group.id {
                e.bound = bound;
            }
        }

        let stash = self.current_group().cursor;
        self.cursor.move_to(stash.x, stash.y);

        // the group already carries its children's spacing
        let spacing = self.spacing;
        let closing = Element::sized(bound.w - spacing * 2.0, bound.h - spacing * 2.0);
        self.extend(&closing);
        self.advance(&closing);

        self.cursor.reset();
        tracing::trace!(depth = self.groups.len(), id = ?group.id, ?bound, "end layout");
        bound
    }

    /// Grow the current group by `elem`'s footprint.
    pub fn extend(&mut self, elem: &Element) {
        let footprint = elem.footprint(self.spacing);
        let group = self.current_group_mut();
        let layout_type = group.layout_type;
        layout_type.extend(&mut group.size, footprint);
    }

    /// Step the cursor past `elem`'s footprint.
    ///
    /// Closes the placement of one element: pending cursor state is cleared.
    pub fn advance(&mut self, elem: &Element) {
        let footprint = elem.footprint(self.spacing);
        let mut at = self.cursor.position();
        self.current_group().layout_type.advance(&mut at, footprint);
        self.cursor.move_to(at.x, at.y);
        self.cursor.reset();
    }

    /// Place a leaf element at the cursor and return its absolute bound.
    ///
    /// Per axis the size is the pending explicit size if non-zero, else
    /// `natural` if non-zero, else the size recorded last frame.
    pub fn place(&mut self, id: ElementId, natural: Size) -> Bound {
        let pending = self.cursor.take_pending();
        let slot = self.slot_for(id);
        let previous = self
            .elements
            .get(slot)
            .map_or(Size::AUTO, |e| e.bound.extent());

        let explicit = if pending.flags.contains(DirtyFlags::SIZE) {
            pending.size
        } else {
            Size::AUTO
        };
        let w = resolve(explicit.w, natural.w, previous.w);
        let h = resolve(explicit.h, natural.h, previous.h);
        let margin = pending.margin;

        let group = self.current_group();
        let gravity = if pending.flags.contains(DirtyFlags::GRAVITY) {
            pending.gravity
        } else {
            group.gravity
        };
        let origin = group.content_origin();
        let available = group.available();
        let (align_x, align_y) = group.layout_type.gravity_axes();

        let spacing = self.spacing;
        let at = self.cursor.position();
        let mut element = Element::sized(w, h).with_margin(margin);
        element.id = id;
        let footprint = element.footprint(spacing);

        let mut x = origin.x + at.x + spacing + margin.left;
        let mut y = origin.y + at.y + spacing + margin.top;
        if align_x {
            x += Gravity::align(gravity.x, available.w - at.x, footprint.w);
        }
        if align_y {
            y += Gravity::align(gravity.y, available.h - at.y, footprint.h);
        }
        element.bound.offset(x, y);

        if let Some(e) = self.elements.get_mut(slot) {
            e.bound = element.bound;
            e.margin = margin;
        }

        self.extend(&element);
        self.advance(&element);
        element.bound
    }

    /// Apply `placement` to the cursor, then [`place`](Self::place).
    pub fn place_with(&mut self, id: ElementId, natural: Size, placement: &Placement) -> Bound {
        self.cursor.configure(placement);
        self.place(id, natural)
    }

    /// Start a layout pass: the root's accumulation and the cursor restart.
    ///
    /// Groups left open by the previous pass are discarded.
    pub fn begin_frame(&mut self) {
        if !self.groups.is_empty() {
            tracing::warn!(depth = self.groups.len(), "discarding groups left open by previous frame");
            self.groups.clear();
        }
        self.root.size = Size::AUTO;
        self.root.cursor = Point::ZERO;
        self.cursor = Cursor::new();
    }

    /// Finish a layout pass and return the root's bound.
    ///
    /// Fails if groups are still open; they are discarded so the next frame
    /// starts from the root.
    pub fn end_frame(&mut self) -> Result<Bound, LayoutError> {
        let depth = self.groups.len();
        if depth > 0 {
            tracing::warn!(depth, "layout groups left open at end of frame");
            self.groups.clear();
            return Err(LayoutError::UnclosedGroups { depth });
        }
        let bound = self.root.finalize();
        self.root.previous = bound.extent();
        Ok(bound)
    }

    /// Textual snapshot of the element store and group stack.
    pub fn dump(&self) -> String {
        let elements = self
            .elements
            .iter()
            .map(|e| format!("  {:?} {:?} {:?}\n", e.id, e.bound, e.margin))
            .collect::<String>();
        let groups = std::iter::once(&self.root)
            .chain(&self.groups)
            .map(|g| {
                format!(
                    "  {:?} {:?} {:?} size={:?} cursor={:?}\n",
                    g.layout_type, g.id, g.bound, g.size, g.cursor
                )
            })
            .collect::<String>();
        let out = format!(
            "elements ({}):\n{elements}groups ({}):\n{groups}cursor: {:?} {:?}",
            self.elements.len(),
            self.groups.len() + 1,
            self.cursor.position(),
            self.cursor.flags(),
        );
        tracing::debug!("{out}");
        out
    }
}

#[inline]
fn resolve(explicit: f32, natural: f32, previous: f32) -> f32 {
    if explicit != 0.0 {
        explicit
    } else if natural != 0.0 {
        natural
    } else {
        previous
    }
}
