use serde::{Deserialize, Serialize};

use crate::math::{Transform, Vec2};
use crate::shapes::{AxisAlignedBox, Disc, RoundedBox, Shape, ShapeKind};

use super::collider::{Collider, ColliderEvents};
use super::rigid_body::{AxisLocks, RigidBody, SimulationKind};

/// Flat, serializable snapshot of a collider's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderDescription {
    pub shape: ShapeKind,
    #[serde(default)]
    pub is_trigger: bool,
    pub local_center: Vec2,
    /// Half-extents. Ignored for discs.
    #[serde(default)]
    pub extents: Vec2,
    /// Disc radius or corner radius. Ignored for axis-aligned boxes.
    #[serde(default)]
    pub radius: f64,
    /// Local right axis of a rounded box.
    #[serde(default = "default_right")]
    pub right: Vec2,
    #[serde(default)]
    pub events: ColliderEvents,
}

fn default_right() -> Vec2 {
    Vec2::RIGHT
}

impl ColliderDescription {
    pub fn from_collider(collider: &Collider) -> Self {
        let (extents, radius, right) = match collider.local_shape() {
            Shape::AxisAlignedBox(b) => (b.half_extents, 0.0, Vec2::RIGHT),
            Shape::Disc(d) => (Vec2::ZERO, d.radius, Vec2::RIGHT),
            Shape::RoundedBox(rb) => (rb.inner.half_extents, rb.radius, rb.inner.right),
        };
        Self {
            shape: collider.local_shape().kind(),
            is_trigger: collider.is_trigger(),
            local_center: collider.local_shape().center(),
            extents,
            radius,
            right,
            events: collider.events.clone(),
        }
    }

    /// The described shape. Not validated here; collider creation does that.
    pub fn to_shape(&self) -> Shape {
        match self.shape {
            ShapeKind::AxisAlignedBox => {
                Shape::AxisAlignedBox(AxisAlignedBox::new(self.local_center, self.extents))
            }
            ShapeKind::Disc => Shape::Disc(Disc::new(self.local_center, self.radius)),
            ShapeKind::RoundedBox => Shape::RoundedBox(RoundedBox::new(
                self.local_center,
                self.right,
                self.extents,
                self.radius,
            )),
        }
    }
}

/// Flat, serializable snapshot of a body and its collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescription {
    pub kind: SimulationKind,
    pub mass: f64,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub velocity: Vec2,
    #[serde(default)]
    pub angular_velocity: f64,
    pub restitution: f64,
    pub friction: f64,
    #[serde(default)]
    pub linear_drag: f64,
    #[serde(default)]
    pub angular_drag: f64,
    #[serde(default)]
    pub lock_x: bool,
    #[serde(default)]
    pub lock_y: bool,
    #[serde(default)]
    pub lock_rotation: bool,
    pub gravity_scale: Vec2,
    #[serde(default)]
    pub collider: Option<ColliderDescription>,
}

impl BodyDescription {
    pub(crate) fn from_body(body: &RigidBody, collider: Option<&Collider>) -> Self {
        Self {
            kind: body.original_kind(),
            mass: body.mass(),
            transform: body.transform,
            velocity: body.velocity,
            angular_velocity: body.angular_velocity,
            restitution: body.material.restitution(),
            friction: body.material.friction(),
            linear_drag: body.material.linear_drag(),
            angular_drag: body.material.angular_drag(),
            lock_x: body.locks.x,
            lock_y: body.locks.y,
            lock_rotation: body.locks.rotation,
            gravity_scale: body.gravity_scale,
            collider: collider.map(ColliderDescription::from_collider),
        }
    }

    pub fn locks(&self) -> AxisLocks {
        AxisLocks {
            x: self.lock_x,
            y: self.lock_y,
            rotation: self.lock_rotation,
        }
    }
}
