use super::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Placement of a body in the world. Rotation is in degrees, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64,
    /// Uniform scale applied to collider shapes before rotation.
    pub scale: f64,
}

impl Transform {
    /// Creates a new unscaled transform.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Maps a local point to world space: scale, rotate, then translate.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        (point * self.scale).rotate_degrees(self.rotation) + self.position
    }

    /// Maps a local direction to world space. Directions ignore translation and scale.
    pub fn apply_direction(&self, direction: Vec2) -> Vec2 {
        direction.rotate_degrees(self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_transform_identity() {
        let t = Transform::identity();
        let p = Vec2::new(5.0, -3.0);
        assert_eq!(t.apply(p), p);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn test_transform_apply_combined() {
        let t = Transform::new(Vec2::new(10.0, 5.0), 90.0);
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(tp.x, 10.0, epsilon = EPSILON);
        assert_abs_diff_eq!(tp.y, 6.0, epsilon = EPSILON);
    }

    #[test]
    fn test_transform_apply_scaled() {
        let t = Transform::new(Vec2::new(1.0, 1.0), 0.0).with_scale(2.0);
        let tp = t.apply(Vec2::new(0.5, -0.5));
        assert_abs_diff_eq!(tp.x, 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(tp.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let t = Transform::new(Vec2::new(100.0, -40.0), 180.0).with_scale(3.0);
        let d = t.apply_direction(Vec2::RIGHT);
        assert_abs_diff_eq!(d.x, -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(d.y, 0.0, epsilon = EPSILON);
    }
}
