//! Layout manager configuration.

use crate::error::LayoutError;

/// Settings fixed for the lifetime of a [`LayoutManager`](super::LayoutManager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Space added on each side of every element, per axis.
    pub spacing: f32,
    /// Records to reserve in the element store.
    pub element_capacity: usize,
    /// Nesting depth to reserve in the group stack.
    pub group_capacity: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            element_capacity: 32,
            group_capacity: 8,
        }
    }
}

impl LayoutConfig {
    /// Set the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the element store capacity.
    #[must_use]
    pub const fn with_element_capacity(mut self, capacity: usize) -> Self {
        self.element_capacity = capacity;
        self
    }

    /// Set the group stack capacity.
    #[must_use]
    pub const fn with_group_capacity(mut self, capacity: usize) -> Self {
        self.group_capacity = capacity;
        self
    }

    /// Check the settings.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        let config = LayoutConfig::default();
        assert_eq!(config.spacing, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_spacing() {
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            let err = LayoutConfig::default().with_spacing(bad).validate();
            assert!(matches!(err, Err(LayoutError::InvalidSpacing(_))));
        }
        assert!(LayoutConfig::default().with_spacing(0.0).validate().is_ok());
    }
}
