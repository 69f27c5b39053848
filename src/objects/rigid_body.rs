use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::PhysicsMaterial;
use crate::error::{PhysicsError, Result};
use crate::math::{Transform, Vec2};

use super::collider::INERTIA_PLACEHOLDER;
use super::handles::ColliderHandle;

/// Whether the simulation moves a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationKind {
    /// Never integrated and never pushed by contacts. Infinite mass during resolution.
    Static,
    Dynamic,
}

/// Per-axis motion locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLocks {
    pub x: bool,
    pub y: bool,
    pub rotation: bool,
}

impl AxisLocks {
    /// Zeroes the components of a linear quantity along locked axes.
    pub fn mask(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.x { 0.0 } else { v.x },
            if self.y { 0.0 } else { v.y },
        )
    }
}

/// Opaque identifier of the scene object a body drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

/// Transform shared between a body and the scene object that owns it.
pub type SharedTransform = Rc<RefCell<Transform>>;

#[derive(Debug, Clone)]
pub struct OwnerBinding {
    pub id: OwnerId,
    pub transform: SharedTransform,
}

#[derive(Debug, Clone)]
pub struct RigidBody {
    pub transform: Transform,
    pub velocity: Vec2,
    /// Degrees per second, counter-clockwise.
    pub angular_velocity: f64,
    /// Multiplies world gravity per axis.
    pub gravity_scale: Vec2,
    pub material: PhysicsMaterial,
    pub locks: AxisLocks,

    mass: f64,
    moment_of_inertia: f64,
    kind: SimulationKind,
    original_kind: SimulationKind,

    // Accumulated during a frame and cleared by the integrator.
    pub(crate) force: Vec2,
    pub(crate) torque: f64,

    owner: Option<OwnerBinding>,
    collider: Option<ColliderHandle>,
}

impl RigidBody {
    /// Creates a body at the origin with placeholder inertia. Mass must be finite and
    /// positive since impulses divide by it.
    pub(crate) fn new(mass: f64, kind: SimulationKind) -> Result<Self> {
        check_mass(mass)?;
        Ok(Self {
            transform: Transform::identity(),
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            gravity_scale: Vec2::ONE,
            material: PhysicsMaterial::default(),
            locks: AxisLocks::default(),
            mass,
            moment_of_inertia: INERTIA_PLACEHOLDER,
            kind,
            original_kind: kind,
            force: Vec2::ZERO,
            torque: 0.0,
            owner: None,
            collider: None,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    pub fn kind(&self) -> SimulationKind {
        self.kind
    }

    /// Kind to return to after a temporary override.
    pub fn original_kind(&self) -> SimulationKind {
        self.original_kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == SimulationKind::Dynamic
    }

    pub fn collider(&self) -> Option<ColliderHandle> {
        self.collider
    }

    pub fn owner(&self) -> Option<&OwnerBinding> {
        self.owner.as_ref()
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Degrees.
    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn torque(&self) -> f64 {
        self.torque
    }

    /// Applies a force at the body's origin.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies a force at a world point, which also produces torque about the origin.
    pub fn apply_force_at(&mut self, force: Vec2, point_world: Vec2) {
        self.force += force;
        self.torque += (point_world - self.transform.position).cross(force);
    }

    pub fn apply_torque(&mut self, torque: f64) {
        self.torque += torque;
    }

    /// Instantly changes linear and angular velocity as if `impulse` hit `point_world`.
    /// Static bodies ignore impulses.
    pub fn apply_impulse_at(&mut self, impulse: Vec2, point_world: Vec2) {
        if !self.is_dynamic() {
            return;
        }

        self.velocity = self.locks.mask(self.velocity + impulse / self.mass);

        if self.locks.rotation {
            self.angular_velocity = 0.0;
            return;
        }
        let lever = (point_world - self.transform.position).perpendicular();
        let angular_impulse = impulse.dot(lever);
        self.angular_velocity += (angular_impulse / self.moment_of_inertia).to_degrees();
    }

    /// Velocity of the material point of this body currently at `point_world`.
    pub fn velocity_at_point(&self, point_world: Vec2) -> Vec2 {
        let r = point_world - self.transform.position;
        self.velocity + r.perpendicular() * self.angular_velocity.to_radians()
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    pub(crate) fn set_mass(&mut self, mass: f64) -> Result<()> {
        check_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    pub(crate) fn set_moment_of_inertia(&mut self, inertia: f64) {
        if inertia.is_finite() && inertia > 0.0 {
            self.moment_of_inertia = inertia;
        } else {
            warn!(inertia, "rejected moment of inertia, using placeholder");
            self.moment_of_inertia = INERTIA_PLACEHOLDER;
        }
    }

    /// Changes the kind and makes it the one restored after overrides.
    pub(crate) fn set_kind(&mut self, kind: SimulationKind) {
        self.kind = kind;
        self.original_kind = kind;
    }

    /// Changes the kind without touching the original kind.
    pub(crate) fn override_kind(&mut self, kind: SimulationKind) {
        self.kind = kind;
    }

    pub(crate) fn set_collider(&mut self, collider: Option<ColliderHandle>) {
        self.collider = collider;
    }

    pub(crate) fn set_owner(&mut self, owner: Option<OwnerBinding>) {
        self.owner = owner;
    }

    /// Copies the owner's transform into the body.
    pub(crate) fn pull_from_owner(&mut self) {
        let Some(owner) = &self.owner else { return };
        match owner.transform.try_borrow() {
            Ok(transform) => self.transform = *transform,
            Err(_) => warn!(owner = owner.id.0, "owner transform is borrowed, keeping body transform"),
        }
    }

    /// Copies the body's transform out to the owner.
    pub(crate) fn push_to_owner(&self) {
        let Some(owner) = &self.owner else { return };
        match owner.transform.try_borrow_mut() {
            Ok(mut transform) => *transform = self.transform,
            Err(_) => warn!(owner = owner.id.0, "owner transform is borrowed, skipping write-back"),
        }
    }
}

fn check_mass(mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}
