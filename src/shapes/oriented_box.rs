use crate::math::{Transform, Vec2};
use serde::{Deserialize, Serialize};

/// A rectangle with an arbitrary orientation, described by its centre, unit right axis
/// and half-extents along right/up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub center: Vec2,
    pub right: Vec2,
    pub half_extents: Vec2,
}

impl OrientedBox {
    /// `right` is normalized. A zero axis falls back to +x. Extents are kept as given.
    pub fn new(center: Vec2, right: Vec2, half_extents: Vec2) -> Self {
        let right = right.normalize();
        Self {
            center,
            right: if right == Vec2::ZERO { Vec2::RIGHT } else { right },
            half_extents,
        }
    }

    pub fn up(&self) -> Vec2 {
        self.right.perpendicular()
    }

    /// Corners in counter-clockwise order starting at (+right, +up).
    pub fn corners(&self) -> [Vec2; 4] {
        let rx = self.right * self.half_extents.x;
        let uy = self.up() * self.half_extents.y;
        [
            self.center + rx + uy,
            self.center - rx + uy,
            self.center - rx - uy,
            self.center + rx - uy,
        ]
    }

    /// Projection interval `(min, max)` of the four corners onto `axis`.
    pub fn project(&self, axis: Vec2) -> (f64, f64) {
        self.corners()
            .iter()
            .map(|corner| corner.dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            })
    }

    /// Point-in-box test with a small tolerance so corners lying on an edge count as inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        const TOLERANCE: f64 = 1e-9;
        let local = point - self.center;
        local.dot(self.right).abs() <= self.half_extents.x + TOLERANCE
            && local.dot(self.up()).abs() <= self.half_extents.y + TOLERANCE
    }

    /// Nearest point on or inside the box.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let local = point - self.center;
        let along_right = local
            .dot(self.right)
            .clamp(-self.half_extents.x, self.half_extents.x);
        let along_up = local
            .dot(self.up())
            .clamp(-self.half_extents.y, self.half_extents.y);
        self.center + self.right * along_right + self.up() * along_up
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::new(
            transform.apply(self.center),
            transform.apply_direction(self.right),
            self.half_extents * transform.scale.abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_corners_axis_aligned() {
        let b = OrientedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(2.0, 1.0));
        let corners = b.corners();
        assert_eq!(corners[0], Vec2::new(2.0, 1.0));
        assert_eq!(corners[2], Vec2::new(-2.0, -1.0));
    }

    #[test]
    fn test_project_rotated() {
        let b = OrientedBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        let (lo, hi) = b.project(Vec2::RIGHT);
        let half_diag = 2.0f64.sqrt();
        assert_abs_diff_eq!(lo, -half_diag, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, half_diag, epsilon = 1e-12);
    }

    #[test]
    fn test_contains_point_includes_edges() {
        let b = OrientedBox::new(Vec2::new(1.0, 1.0), Vec2::RIGHT, Vec2::new(1.0, 1.0));
        assert!(b.contains_point(Vec2::new(2.0, 2.0)));
        assert!(b.contains_point(Vec2::new(1.5, 0.5)));
        assert!(!b.contains_point(Vec2::new(2.1, 1.0)));
    }

    #[test]
    fn test_closest_point_rotated() {
        let b = OrientedBox::new(Vec2::ZERO, Vec2::UP, Vec2::new(2.0, 1.0));
        // right = +y, up = -x; box spans y in [-2, 2], x in [-1, 1]
        let p = b.closest_point(Vec2::new(5.0, 5.0));
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_axis_falls_back() {
        let b = OrientedBox::new(Vec2::ZERO, Vec2::ZERO, Vec2::ONE);
        assert_eq!(b.right, Vec2::RIGHT);
    }

    #[test]
    fn test_negative_extents_are_not_flipped() {
        let b = OrientedBox::new(Vec2::ZERO, Vec2::RIGHT, Vec2::new(-1.0, 1.0));
        assert_eq!(b.half_extents, Vec2::new(-1.0, 1.0));
    }
}
