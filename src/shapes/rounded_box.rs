use crate::math::{Transform, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::OrientedBox;

/// An oriented box with a uniform corner radius ("pillbox").
///
/// This is the common representation every collider shape reduces to before narrow-phase
/// testing: an axis-aligned box is a rounded box with no rotation and no radius, and a disc
/// is one with zero extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedBox {
    pub inner: OrientedBox,
    pub radius: f64,
}

impl RoundedBox {
    pub fn new(center: Vec2, right: Vec2, half_extents: Vec2, radius: f64) -> Self {
        Self::from_parts(OrientedBox::new(center, right, half_extents), radius)
    }

    pub fn from_parts(inner: OrientedBox, radius: f64) -> Self {
        Self { inner, radius }
    }

    pub fn center(&self) -> Vec2 {
        self.inner.center
    }

    /// Box area, plus the strips along each edge, plus the four quarter-disc corners.
    pub fn area(&self) -> f64 {
        let (ex, ey) = (self.inner.half_extents.x, self.inner.half_extents.y);
        let perimeter = 4.0 * (ex + ey);
        4.0 * ex * ey + perimeter * self.radius + PI * self.radius * self.radius
    }

    /// Approximate moment of inertia about the owning body's origin.
    ///
    /// The shape is split into a central rectangle and two flanking side rectangles, each
    /// weighted by its share of the total area. Whatever mass is left is treated as a disc
    /// of the corner radius sitting on a corner. The sum is then shifted from the shape
    /// centre to the body origin.
    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        let (ex, ey) = (self.inner.half_extents.x, self.inner.half_extents.y);
        let r = self.radius;
        let total_area = self.area();

        let central_area = 4.0 * ex * (ey + r / 2.0);
        let central_mass = mass * central_area / total_area;
        let mut inertia = rectangle_inertia(ex, ey + r / 2.0, central_mass);

        let side_area = 4.0 * (r / 2.0) * ey;
        let side_mass = mass * side_area / total_area;
        let side_offset = ex + r / 2.0;
        let side_inertia =
            rectangle_inertia(r / 2.0, ey, side_mass) + side_mass * side_offset * side_offset;
        inertia += 2.0 * side_inertia;

        let leftover_mass = (mass - central_mass - 2.0 * side_mass).max(0.0);
        let corner = Vec2::new(ex, ey);
        inertia += 0.5 * leftover_mass * r * r + leftover_mass * corner.magnitude_squared();

        inertia + mass * self.inner.center.magnitude_squared()
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::from_parts(
            self.inner.transformed(transform),
            self.radius * transform.scale.abs(),
        )
    }
}

/// `(1/12)·m·(w² + h²)` for a rectangle given by half-extents.
fn rectangle_inertia(half_width: f64, half_height: f64, mass: f64) -> f64 {
    let (w, h) = (2.0 * half_width, 2.0 * half_height);
    mass * (w * w + h * h) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_area() {
        let rb = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(1.0, 2.0), 0.5);
        let expected = 8.0 + 12.0 * 0.5 + PI * 0.25;
        assert_abs_diff_eq!(rb.area(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_radius_matches_rectangle() {
        let rb = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(1.0, 0.5), 0.0);
        let expected = (3.0 / 12.0) * (4.0 + 1.0);
        assert_abs_diff_eq!(rb.moment_of_inertia(3.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_extents_matches_disc() {
        let rb = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::ZERO, 2.0);
        assert_abs_diff_eq!(rb.moment_of_inertia(10.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decomposition_by_hand() {
        let (ex, ey, r, m) = (1.0, 1.0, 1.0, 1.0);
        let rb = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(ex, ey), r);
        let total = 4.0 + 8.0 + PI;
        let central_mass = m * 6.0 / total;
        let side_mass = m * 2.0 / total;
        let leftover = m - central_mass - 2.0 * side_mass;
        let expected = central_mass * (4.0 + 9.0) / 12.0
            + 2.0 * (side_mass * (1.0 + 4.0) / 12.0 + side_mass * 1.5 * 1.5)
            + 0.5 * leftover + leftover * 2.0;
        assert_abs_diff_eq!(rb.moment_of_inertia(m), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_adds_parallel_axis_term() {
        let centred = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(1.0, 0.5), 0.25);
        let shifted = RoundedBox::new(Vec2::new(0.0, 2.0), Vec2::RIGHT, Vec2::new(1.0, 0.5), 0.25);
        let diff = shifted.moment_of_inertia(2.0) - centred.moment_of_inertia(2.0);
        assert_abs_diff_eq!(diff, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_does_not_change_inertia() {
        let a = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(2.0, 0.5), 0.3);
        let b = RoundedBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.5), 0.3);
        assert_abs_diff_eq!(a.moment_of_inertia(1.0), b.moment_of_inertia(1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_radius_is_kept() {
        let rb = RoundedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::ONE, -0.5);
        assert_eq!(rb.radius, -0.5);
    }
}
