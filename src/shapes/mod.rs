pub mod aabb;
pub mod disc;
pub mod oriented_box;
pub mod rounded_box;

pub use aabb::AxisAlignedBox;
pub use disc::Disc;
pub use oriented_box::OrientedBox;
pub use rounded_box::RoundedBox;

use crate::error::{PhysicsError, Result};
use crate::math::{Transform, Vec2};
use serde::{Deserialize, Serialize};

/// Discriminant of [`Shape`], used for logging and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    AxisAlignedBox,
    Disc,
    RoundedBox,
}

/// The geometric shape of a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    AxisAlignedBox(AxisAlignedBox),
    Disc(Disc),
    RoundedBox(RoundedBox),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::AxisAlignedBox(_) => ShapeKind::AxisAlignedBox,
            Shape::Disc(_) => ShapeKind::Disc,
            Shape::RoundedBox(_) => ShapeKind::RoundedBox,
        }
    }

    /// Centre of the shape in whatever space the shape is expressed in.
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::AxisAlignedBox(b) => b.center,
            Shape::Disc(d) => d.center,
            Shape::RoundedBox(rb) => rb.center(),
        }
    }

    /// Rejects parameters that would later turn into a NaN or a zero inertia.
    pub fn validate(&self) -> Result<()> {
        if !self.center().is_finite() {
            return Err(PhysicsError::invalid_shape("centre is not finite"));
        }
        match self {
            Shape::AxisAlignedBox(b) => {
                check_extents(b.half_extents)?;
                if b.half_extents == Vec2::ZERO {
                    return Err(PhysicsError::invalid_shape("box has zero extents"));
                }
            }
            Shape::Disc(d) => {
                if !d.radius.is_finite() || d.radius <= 0.0 {
                    return Err(PhysicsError::invalid_shape(format!(
                        "disc radius {} must be finite and positive",
                        d.radius
                    )));
                }
            }
            Shape::RoundedBox(rb) => {
                check_extents(rb.inner.half_extents)?;
                if !rb.radius.is_finite() || rb.radius < 0.0 {
                    return Err(PhysicsError::invalid_shape(format!(
                        "corner radius {} must be finite and non-negative",
                        rb.radius
                    )));
                }
                if !rb.inner.right.is_finite() {
                    return Err(PhysicsError::invalid_shape("right axis is not finite"));
                }
                if rb.area() <= 0.0 {
                    return Err(PhysicsError::invalid_shape("rounded box has zero area"));
                }
            }
        }
        Ok(())
    }

    /// Moment of inertia of this shape, carrying `mass`, about the local origin.
    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        match self {
            Shape::AxisAlignedBox(b) => b.moment_of_inertia(mass),
            Shape::Disc(d) => d.moment_of_inertia(mass),
            Shape::RoundedBox(rb) => rb.moment_of_inertia(mass),
        }
    }

    pub fn transformed(&self, transform: &Transform) -> Shape {
        match self {
            Shape::AxisAlignedBox(b) => Shape::AxisAlignedBox(b.transformed(transform)),
            Shape::Disc(d) => Shape::Disc(d.transformed(transform)),
            Shape::RoundedBox(rb) => Shape::RoundedBox(rb.transformed(transform)),
        }
    }

    pub fn to_rounded_box(&self) -> RoundedBox {
        match self {
            Shape::AxisAlignedBox(b) => b.to_rounded_box(),
            Shape::Disc(d) => d.to_rounded_box(),
            Shape::RoundedBox(rb) => *rb,
        }
    }
}

fn check_extents(half_extents: Vec2) -> Result<()> {
    if !half_extents.is_finite() || half_extents.x < 0.0 || half_extents.y < 0.0 {
        return Err(PhysicsError::invalid_shape(format!(
            "half-extents {:?} must be finite and non-negative",
            half_extents
        )));
    }
    Ok(())
}
