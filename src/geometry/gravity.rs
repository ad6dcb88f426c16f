//! Gravity: alignment of a box inside the space its container offers.

/// Alignment weights, each in `[0, 1]`.
///
/// `0` aligns to the start edge, `1` to the end edge, `0.5` centers.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Gravity {
    /// Horizontal weight.
    pub x: f32,
    /// Vertical weight.
    pub y: f32,
}

impl Gravity {
    /// Create a gravity, clamping both components to `[0, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Start-aligned on both axes.
    pub const START: Self = Self { x: 0.0, y: 0.0 };

    /// Centered on both axes.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Offset that places `used` units inside `available` units along one axis.
    ///
    /// Returns zero when there is no free space.
    #[inline]
    pub fn align(weight: f32, available: f32, used: f32) -> f32 {
        let free = available - used;
        if free > 0.0 {
            free * weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_clamped() {
        let g = Gravity::new(-1.0, 2.5);
        assert_eq!(g, Gravity::new(0.0, 1.0));
        assert_eq!(Gravity::new(0.5, 0.5), Gravity::CENTER);
        assert_eq!(Gravity::default(), Gravity::START);
    }

    #[test]
    fn test_align() {
        assert_eq!(Gravity::align(0.5, 100.0, 20.0), 40.0);
        assert_eq!(Gravity::align(1.0, 100.0, 20.0), 80.0);
        assert_eq!(Gravity::align(1.0, 10.0, 20.0), 0.0);
    }
}
