use tracing::debug;

use crate::objects::collider::INERTIA_PLACEHOLDER;
use crate::objects::{BodyHandle, ColliderHandle};

use super::events::{fire, EventKind};
use super::physics_world::PhysicsWorld;

impl PhysicsWorld {
    /// Destroys everything marked for removal.
    ///
    /// A pending body takes its collider with it. Every destroyed collider first raises
    /// exit events for each trigger relationship it takes part in, from both sides, and
    /// is dropped from every overlap record. Running cleanup again is a no-op.
    pub(super) fn cleanup(&mut self) {
        let pending_bodies: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, slot)| !slot.is_live())
            .map(|(handle, _)| handle)
            .collect();

        for &body in &pending_bodies {
            let collider = self.bodies.get(body).and_then(|slot| slot.value.collider());
            if let Some(slot) = collider.and_then(|c| self.colliders.get_mut(c)) {
                slot.mark_pending();
            }
        }

        let pending_colliders: Vec<ColliderHandle> = self
            .colliders
            .iter()
            .filter(|(_, slot)| !slot.is_live())
            .map(|(handle, _)| handle)
            .collect();

        for &collider in &pending_colliders {
            self.destroy_collider(collider);
        }

        for &body in &pending_bodies {
            self.bodies.remove(body);
            self.dynamic_bodies.retain(|&h| h != body);
            self.static_bodies.retain(|&h| h != body);
        }

        if !pending_bodies.is_empty() || !pending_colliders.is_empty() {
            debug!(
                bodies = pending_bodies.len(),
                colliders = pending_colliders.len(),
                "cleanup destroyed entries"
            );
        }
    }

    fn destroy_collider(&mut self, handle: ColliderHandle) {
        let Some(slot) = self.colliders.remove(handle) else {
            return;
        };
        let mut collider = slot.value;

        for other in collider.take_overlaps() {
            fire(self.events.as_mut(), &collider.events, EventKind::Exit, handle, other);
        }
        for (trigger, slot) in self.colliders.iter_mut() {
            if slot.value.forget_overlap(handle) {
                fire(self.events.as_mut(), &slot.value.events, EventKind::Exit, trigger, handle);
            }
        }

        if let Some(body) = collider.body() {
            if let Some(slot) = self.bodies.get_mut(body) {
                if slot.value.collider() == Some(handle) {
                    slot.value.set_collider(None);
                    slot.value.set_moment_of_inertia(INERTIA_PLACEHOLDER);
                }
            }
        }
    }
}
