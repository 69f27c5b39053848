use tracing::trace;

use crate::collision::check_collision;
use crate::objects::ColliderHandle;
use crate::shapes::Shape;

use super::events::{fire, EventKind};
use super::physics_world::PhysicsWorld;

impl PhysicsWorld {
    /// Tests every trigger against every other live collider and raises enter, stay and
    /// exit transitions against the trigger's recorded overlaps.
    pub(super) fn resolve_triggers(&mut self) {
        let shapes: Vec<(ColliderHandle, Shape, bool)> = self
            .colliders()
            .map(|(handle, collider)| (handle, self.world_shape_of(collider), collider.is_trigger()))
            .collect();

        for &(trigger, trigger_shape, is_trigger) in &shapes {
            if !is_trigger {
                continue;
            }
            for &(other, other_shape, _) in &shapes {
                if other == trigger {
                    continue;
                }
                let overlapping = check_collision(&trigger_shape, &other_shape).is_some();
                let Some(slot) = self.colliders.get_mut(trigger) else {
                    continue;
                };
                let collider = &mut slot.value;

                if overlapping {
                    let kind = if collider.record_overlap(other) {
                        EventKind::Enter
                    } else {
                        EventKind::Stay
                    };
                    collider.set_colliding(true);
                    fire(self.events.as_mut(), &collider.events, kind, trigger, other);
                    if let Some(other_slot) = self.colliders.get_mut(other) {
                        other_slot.value.set_colliding(true);
                    }
                    if kind == EventKind::Enter {
                        trace!(?trigger, ?other, "trigger enter");
                    }
                } else if collider.forget_overlap(other) {
                    fire(self.events.as_mut(), &collider.events, EventKind::Exit, trigger, other);
                    trace!(?trigger, ?other, "trigger exit");
                }
            }
        }
    }
}
