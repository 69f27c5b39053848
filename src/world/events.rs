use serde::{Deserialize, Serialize};

use crate::objects::{ColliderEvents, ColliderHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A solid contact was resolved this step.
    Hit,
    /// A trigger started overlapping another collider.
    Enter,
    /// A trigger is still overlapping another collider.
    Stay,
    /// A trigger stopped overlapping another collider, or one of them was destroyed.
    Exit,
}

/// A named notification raised by `collider` about `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub name: String,
    pub kind: EventKind,
    pub collider: ColliderHandle,
    pub other: ColliderHandle,
}

/// Receives collision events as the world raises them.
///
/// Sinks get no access to the world. Removal requests made in response to an event are
/// applied by the host after `step` returns and take effect at the next cleanup.
pub trait CollisionEventSink {
    fn notify(&mut self, event: &CollisionEvent);
}

impl<F> CollisionEventSink for F
where
    F: FnMut(&CollisionEvent),
{
    fn notify(&mut self, event: &CollisionEvent) {
        self(event)
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreEvents;

impl CollisionEventSink for IgnoreEvents {
    fn notify(&mut self, _event: &CollisionEvent) {}
}

impl ColliderEvents {
    pub fn name(&self, kind: EventKind) -> Option<&str> {
        match kind {
            EventKind::Hit => self.hit.as_deref(),
            EventKind::Enter => self.enter.as_deref(),
            EventKind::Stay => self.stay.as_deref(),
            EventKind::Exit => self.exit.as_deref(),
        }
    }
}

/// Raises `kind` on behalf of `collider` if it has a name for it.
pub(crate) fn fire(
    sink: &mut dyn CollisionEventSink,
    events: &ColliderEvents,
    kind: EventKind,
    collider: ColliderHandle,
    other: ColliderHandle,
) {
    if let Some(name) = events.name(kind) {
        sink.notify(&CollisionEvent {
            name: name.to_string(),
            kind,
            collider,
            other,
        });
    }
}
