//! Defines physical material properties.

use serde::{Deserialize, Serialize};

/// Surface and damping properties of a rigid body.
///
/// Fields are private so every write goes through the same clamping as [`PhysicsMaterial::new`].
/// Deserialized materials are clamped too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaterialFields")]
pub struct PhysicsMaterial {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    restitution: f64,
    /// Coulomb friction coefficient. Range [0, infinity).
    friction: f64,
    /// Fraction of linear velocity removed per second.
    linear_drag: f64,
    /// Fraction of angular velocity removed per second.
    angular_drag: f64,
}

/// Unchecked wire form of [`PhysicsMaterial`].
#[derive(Deserialize)]
struct MaterialFields {
    restitution: f64,
    friction: f64,
    linear_drag: f64,
    angular_drag: f64,
}

impl From<MaterialFields> for PhysicsMaterial {
    fn from(fields: MaterialFields) -> Self {
        PhysicsMaterial::new(
            fields.restitution,
            fields.friction,
            fields.linear_drag,
            fields.angular_drag,
        )
    }
}

impl PhysicsMaterial {
    /// Creates a new material, clamping every coefficient into its valid range.
    pub fn new(restitution: f64, friction: f64, linear_drag: f64, angular_drag: f64) -> Self {
        PhysicsMaterial {
            restitution: sanitize(restitution).clamp(0.0, 1.0),
            friction: sanitize(friction).max(0.0),
            linear_drag: sanitize(linear_drag).max(0.0),
            angular_drag: sanitize(angular_drag).max(0.0),
        }
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn linear_drag(&self) -> f64 {
        self.linear_drag
    }

    pub fn angular_drag(&self) -> f64 {
        self.angular_drag
    }

    /// Clamped to [0, 1]. NaN becomes 0.
    pub fn set_restitution(&mut self, restitution: f64) {
        self.restitution = sanitize(restitution).clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, friction: f64) {
        self.friction = sanitize(friction).max(0.0);
    }

    pub fn set_linear_drag(&mut self, linear_drag: f64) {
        self.linear_drag = sanitize(linear_drag).max(0.0);
    }

    pub fn set_angular_drag(&mut self, angular_drag: f64) {
        self.angular_drag = sanitize(angular_drag).max(0.0);
    }

    /// Restitution of a contact between two materials.
    pub fn combined_restitution(&self, other: &PhysicsMaterial) -> f64 {
        self.restitution * other.restitution
    }

    /// Friction scale of a contact between two materials.
    pub fn combined_friction(&self, other: &PhysicsMaterial) -> f64 {
        (self.friction * other.friction).abs().sqrt()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

impl Default for PhysicsMaterial {
    /// Moderate restitution, moderate friction, no drag.
    fn default() -> Self {
        PhysicsMaterial {
            restitution: 0.2,
            friction: 0.5,
            linear_drag: 0.0,
            angular_drag: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_clamps() {
        let m = PhysicsMaterial::new(1.5, -1.0, -0.5, f64::NAN);
        assert_eq!(m.restitution, 1.0);
        assert_eq!(m.friction, 0.0);
        assert_eq!(m.linear_drag, 0.0);
        assert_eq!(m.angular_drag, 0.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut m = PhysicsMaterial::default();
        m.set_restitution(5.0);
        m.set_friction(-2.0);
        m.set_linear_drag(f64::NAN);
        m.set_angular_drag(3.0);
        assert_eq!(m.restitution(), 1.0);
        assert_eq!(m.friction(), 0.0);
        assert_eq!(m.linear_drag(), 0.0);
        assert_eq!(m.angular_drag(), 3.0);
    }

    #[test]
    fn test_deserialize_clamps() {
        let json = r#"{"restitution":5.0,"friction":-1.0,"linear_drag":0.5,"angular_drag":-3.0}"#;
        let m: PhysicsMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(m, PhysicsMaterial::new(1.0, 0.0, 0.5, 0.0));
    }

    #[test]
    fn test_combination() {
        let a = PhysicsMaterial::new(0.5, 0.4, 0.0, 0.0);
        let b = PhysicsMaterial::new(0.8, 0.9, 0.0, 0.0);
        assert_abs_diff_eq!(a.combined_restitution(&b), 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(a.combined_friction(&b), 0.6, epsilon = 1e-12);
    }
}
