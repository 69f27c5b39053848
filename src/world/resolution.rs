//! Solid-body contact resolution: positional separation followed by a single
//! sequential impulse with restitution and friction.

use tracing::trace;

use crate::collision::{check_collision, Manifold};
use crate::math::Vec2;
use crate::objects::{BodyHandle, ColliderHandle, RigidBody};

use super::events::{fire, EventKind};
use super::physics_world::PhysicsWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ResolutionMode {
    /// Separate, apply the contact impulse and raise hit events.
    Full,
    /// Separate only.
    PositionOnly,
}

impl PhysicsWorld {
    pub(super) fn resolve_dynamic_static(&mut self, mode: ResolutionMode) {
        let dynamic = self.dynamic_bodies.clone();
        let statics = self.static_bodies.clone();
        for &a in &dynamic {
            for &b in &statics {
                self.resolve_pair(a, b, mode);
            }
        }
    }

    pub(super) fn resolve_dynamic_dynamic(&mut self) {
        let dynamic = self.dynamic_bodies.clone();
        for (i, &a) in dynamic.iter().enumerate() {
            for &b in &dynamic[i + 1..] {
                self.resolve_pair(a, b, ResolutionMode::Full);
            }
        }
    }

    fn resolve_pair(&mut self, a: BodyHandle, b: BodyHandle, mode: ResolutionMode) {
        let Some((collider_a, collider_b)) = self.solid_colliders(a, b) else {
            return;
        };
        let (Some(shape_a), Some(shape_b)) = (self.world_shape(collider_a), self.world_shape(collider_b))
        else {
            return;
        };
        let Some(manifold) = check_collision(&shape_a, &shape_b) else {
            return;
        };

        for handle in [collider_a, collider_b] {
            if let Some(slot) = self.colliders.get_mut(handle) {
                slot.value.set_colliding(true);
            }
        }

        let Some([slot_a, slot_b]) = self.bodies.get_disjoint_mut([a, b]) else {
            return;
        };
        let (body_a, body_b) = (&mut slot_a.value, &mut slot_b.value);

        separate(body_a, body_b, &manifold);
        if mode == ResolutionMode::PositionOnly {
            return;
        }

        if let Some(impulse) = contact_impulse(body_a, body_b, &manifold) {
            body_a.apply_impulse_at(-impulse, manifold.point);
            body_b.apply_impulse_at(impulse, manifold.point);
            trace!(?a, ?b, ?impulse, depth = manifold.depth, "contact impulse");
        }

        self.fire_hit(collider_a, collider_b);
        self.fire_hit(collider_b, collider_a);
    }

    /// Both bodies' colliders, if both are live, attached and solid.
    fn solid_colliders(&self, a: BodyHandle, b: BodyHandle) -> Option<(ColliderHandle, ColliderHandle)> {
        let collider_of = |body: BodyHandle| {
            let handle = self.body(body)?.collider()?;
            let collider = self.collider(handle)?;
            (!collider.is_trigger()).then_some(handle)
        };
        Some((collider_of(a)?, collider_of(b)?))
    }

    fn fire_hit(&mut self, collider: ColliderHandle, other: ColliderHandle) {
        if let Some(slot) = self.colliders.get(collider) {
            fire(self.events.as_mut(), &slot.value.events, EventKind::Hit, collider, other);
        }
    }
}

/// Pushes the bodies apart along the manifold normal. A static body does not move; two
/// dynamic bodies each move by the other's share of the total mass.
fn separate(a: &mut RigidBody, b: &mut RigidBody, manifold: &Manifold) {
    let push = manifold.normal * manifold.depth;
    match (a.is_dynamic(), b.is_dynamic()) {
        (true, false) => a.transform.position -= a.locks.mask(push),
        (false, true) => b.transform.position += b.locks.mask(push),
        (true, true) => {
            let total = a.mass() + b.mass();
            a.transform.position -= a.locks.mask(push * (b.mass() / total));
            b.transform.position += b.locks.mask(push * (a.mass() / total));
        }
        (false, false) => {}
    }
}

/// The impulse B receives at the contact point (A receives its negation), or `None`
/// when the bodies are already separating.
fn contact_impulse(a: &RigidBody, b: &RigidBody, manifold: &Manifold) -> Option<Vec2> {
    let normal = manifold.normal;
    let tangent = normal.perpendicular();
    let point = manifold.point;

    let relative_velocity = contact_velocity(b, point) - contact_velocity(a, point);
    let normal_speed = relative_velocity.dot(normal);
    if normal_speed > 0.0 {
        return None;
    }

    let (inv_mass_a, inv_inertia_a) = inverse_mass(a);
    let (inv_mass_b, inv_inertia_b) = inverse_mass(b);
    let lever_a = (point - a.position()).perpendicular();
    let lever_b = (point - b.position()).perpendicular();
    let effective_inverse_mass = |direction: Vec2| {
        inv_mass_a
            + inv_mass_b
            + lever_a.dot(direction).powi(2) * inv_inertia_a
            + lever_b.dot(direction).powi(2) * inv_inertia_b
    };

    let denominator_n = effective_inverse_mass(normal);
    let denominator_t = effective_inverse_mass(tangent);
    if denominator_n <= 0.0 || denominator_t <= 0.0 {
        return None;
    }

    let restitution = a.material.combined_restitution(&b.material);
    let friction = a.material.combined_friction(&b.material);

    let j_n = -(1.0 + restitution) * normal_speed / denominator_n;
    let j_t = -(1.0 + restitution) * relative_velocity.dot(tangent) / denominator_t;
    let j_t = j_t.max(-j_n).min(j_n) * friction;

    Some(normal * j_n + tangent * j_t)
}

/// Velocity of the body's material at `point`. Static bodies never move.
fn contact_velocity(body: &RigidBody, point: Vec2) -> Vec2 {
    if body.is_dynamic() {
        body.velocity_at_point(point)
    } else {
        Vec2::ZERO
    }
}

/// Inverse mass and inverse inertia, both zero for static bodies.
fn inverse_mass(body: &RigidBody) -> (f64, f64) {
    if body.is_dynamic() {
        (1.0 / body.mass(), 1.0 / body.moment_of_inertia())
    } else {
        (0.0, 0.0)
    }
}
