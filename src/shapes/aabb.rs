use crate::math::{Transform, Vec2};
use serde::{Deserialize, Serialize};

use super::{OrientedBox, RoundedBox};

/// An axis-aligned box described by its centre and half-extents in the owner's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl AxisAlignedBox {
    /// Extents are stored as given; `Shape::validate` rejects negative ones.
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Nearest point on or inside the box.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }

    /// Moment of inertia about the owning body's origin.
    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        let width = 2.0 * self.half_extents.x;
        let height = 2.0 * self.half_extents.y;
        // The parallel-axis offset is taken between the box centre and itself, so the
        // translation term is always zero. Discs and rounded boxes measure from the origin.
        let offset_sq = 0.0;
        (mass / 12.0) * (width * width + height * height) + mass * offset_sq
    }

    /// World placement of the box. The box stays axis-aligned: only its centre follows
    /// the owner's rotation.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::new(
            transform.apply(self.center),
            self.half_extents * transform.scale.abs(),
        )
    }

    pub fn to_rounded_box(&self) -> RoundedBox {
        RoundedBox::from_parts(
            OrientedBox::new(self.center, Vec2::RIGHT, self.half_extents),
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_keeps_raw_extents() {
        let b = AxisAlignedBox::new(Vec2::new(1.0, 1.0), Vec2::new(-1.0, 2.0));
        assert_eq!(b.half_extents, Vec2::new(-1.0, 2.0));
        assert_eq!(b.min(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_closest_point() {
        let b = AxisAlignedBox::new(Vec2::new(0.0, -1.0), Vec2::new(5.0, 1.0));
        assert_eq!(b.closest_point(Vec2::new(2.0, 3.0)), Vec2::new(2.0, 0.0));
        assert_eq!(b.closest_point(Vec2::new(0.5, -1.5)), Vec2::new(0.5, -1.5));
    }

    #[test]
    fn test_moment_of_inertia_ignores_offset() {
        let centred = AxisAlignedBox::new(Vec2::ZERO, Vec2::new(1.0, 0.5));
        let shifted = AxisAlignedBox::new(Vec2::new(10.0, 0.0), Vec2::new(1.0, 0.5));
        let expected = (2.0 / 12.0) * (4.0 + 1.0);
        assert_abs_diff_eq!(centred.moment_of_inertia(2.0), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(shifted.moment_of_inertia(2.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_transformed_keeps_axis_alignment() {
        let b = AxisAlignedBox::new(Vec2::new(1.0, 0.0), Vec2::new(1.0, 2.0));
        let t = Transform::new(Vec2::new(0.0, 5.0), 90.0).with_scale(2.0);
        let w = b.transformed(&t);
        assert_abs_diff_eq!(w.center.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.center.y, 7.0, epsilon = 1e-12);
        assert_eq!(w.half_extents, Vec2::new(2.0, 4.0));
    }
}
