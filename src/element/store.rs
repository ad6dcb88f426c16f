//! Element and ElementStore: an index-stable arena of element records.

use crate::geometry::{Bound, Margin, Size};

/// Client-assigned identifier of one logical UI element, stable across frames.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Create a new element ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The last computed box of one identifier.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Element {
    /// Owning identifier.
    pub id: ElementId,
    /// Absolute position and size.
    pub bound: Bound,
    /// Margin applied around the box.
    pub margin: Margin,
}

impl Element {
    /// Create a zeroed element.
    pub const fn new(id: ElementId) -> Self {
        Self {
            id,
            bound: Bound::ZERO,
            margin: Margin::ZERO,
        }
    }

    /// A free-standing element of the given size, not backed by any record.
    pub const fn sized(w: f32, h: f32) -> Self {
        Self {
            id: ElementId(u32::MAX),
            bound: Bound::new(0.0, 0.0, w, h),
            margin: Margin::ZERO,
        }
    }

    /// Attach a margin.
    #[must_use]
    pub const fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Space the element occupies in its parent: box + margin + `spacing` on
    /// each side.
    #[inline]
    pub fn footprint(&self, spacing: f32) -> Size {
        Size::new(
            self.bound.w + self.margin.horizontal() + spacing + spacing,
            self.bound.h + self.margin.vertical() + spacing + spacing,
        )
    }
}

/// Append-only arena of [`Element`] records.
#[derive(Clone, Debug, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Append a zeroed record for `id` and return it.
    ///
    /// No uniqueness check: call once per identifier per session.
    pub fn create(&mut self, id: ElementId) -> &mut Element {
        let slot = self.create_slot(id);
        &mut self.elements[slot]
    }

    /// Append a zeroed record for `id` and return its index.
    pub fn create_slot(&mut self, id: ElementId) -> usize {
        let slot = self.elements.len();
        self.elements.push(Element::new(id));
        slot
    }

    /// Index of the record for `id`.
    ///
    /// Fast path when identifiers were created densely in order (index == id),
    /// linear scan otherwise.
    pub fn position(&self, id: ElementId) -> Option<usize> {
        match self.elements.get(id.index()) {
            Some(e) if e.id == id => Some(id.index()),
            _ => self.elements.iter().position(|e| e.id == id),
        }
    }

    /// Find the record for `id`.
    pub fn lookup(&self, id: ElementId) -> Option<&Element> {
        self.position(id).map(|slot| &self.elements[slot])
    }

    /// Fast-path only lookup: the record at index `id`, if its tag matches.
    pub fn bound_of(&self, id: ElementId) -> Option<Bound> {
        self.elements
            .get(id.index())
            .filter(|e| e.id == id)
            .map(|e| e.bound)
    }

    /// Record at `slot`.
    pub fn get(&self, slot: usize) -> Option<&Element> {
        self.elements.get(slot)
    }

    /// Record at `slot` for mutation.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Element> {
        self.elements.get_mut(slot)
    }

    /// Drop every record. Issued indices become stale.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}
