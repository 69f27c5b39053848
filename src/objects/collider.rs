use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::math::Transform;
use crate::shapes::Shape;

use super::handles::{BodyHandle, ColliderHandle};

/// Inertia reported when there is no usable mass distribution to compute one from.
pub const INERTIA_PLACEHOLDER: f64 = 1.0;

/// Names of the events a collider raises. An event with no name is not raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliderEvents {
    pub hit: Option<String>,
    pub enter: Option<String>,
    pub stay: Option<String>,
    pub exit: Option<String>,
}

/// A shape bound to at most one rigid body.
#[derive(Debug, Clone)]
pub struct Collider {
    shape: Shape,
    is_trigger: bool,
    colliding: bool,
    pub events: ColliderEvents,
    body: Option<BodyHandle>,
    /// Colliders this trigger currently overlaps. Empty for non-triggers.
    overlaps: HashSet<ColliderHandle>,
}

impl Collider {
    pub(crate) fn new(shape: Shape, is_trigger: bool) -> Result<Self> {
        shape.validate()?;
        Ok(Self {
            shape,
            is_trigger,
            colliding: false,
            events: ColliderEvents::default(),
            body: None,
            overlaps: HashSet::new(),
        })
    }

    /// Shape in the owning body's local space.
    pub fn local_shape(&self) -> &Shape {
        &self.shape
    }

    /// Shape placed by the owner's transform, or the local shape when there is no owner.
    pub fn world_shape(&self, owner: Option<&Transform>) -> Shape {
        match owner {
            Some(transform) if self.body.is_some() => self.shape.transformed(transform),
            _ => self.shape,
        }
    }

    /// This collider's contribution to its body's moment of inertia.
    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        if self.body.is_none() {
            warn!("moment of inertia requested for a collider with no body");
            return INERTIA_PLACEHOLDER;
        }
        let inertia = self.shape.moment_of_inertia(mass);
        if !inertia.is_finite() || inertia <= 0.0 {
            warn!(inertia, kind = ?self.shape.kind(), "degenerate moment of inertia, using placeholder");
            return INERTIA_PLACEHOLDER;
        }
        inertia
    }

    pub fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }

    /// Switching the trigger flag forgets any recorded overlaps without raising exits.
    pub fn set_trigger(&mut self, is_trigger: bool) {
        if self.is_trigger != is_trigger {
            self.overlaps.clear();
        }
        self.is_trigger = is_trigger;
    }

    /// True when the collider touched anything during the last step.
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    pub fn overlapping(&self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.overlaps.iter().copied()
    }

    pub fn is_overlapping(&self, other: ColliderHandle) -> bool {
        self.overlaps.contains(&other)
    }

    pub(crate) fn set_body(&mut self, body: Option<BodyHandle>) {
        self.body = body;
    }

    pub(crate) fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }

    pub(crate) fn record_overlap(&mut self, other: ColliderHandle) -> bool {
        self.overlaps.insert(other)
    }

    pub(crate) fn forget_overlap(&mut self, other: ColliderHandle) -> bool {
        self.overlaps.remove(&other)
    }

    pub(crate) fn take_overlaps(&mut self) -> HashSet<ColliderHandle> {
        std::mem::take(&mut self.overlaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::shapes::{AxisAlignedBox, Disc};
    use approx::assert_abs_diff_eq;
    use slotmap::SlotMap;

    fn disc_collider() -> Collider {
        Collider::new(Shape::Disc(Disc::new(Vec2::new(1.0, 0.0), 0.5)), false).unwrap()
    }

    #[test]
    fn test_rejects_invalid_shape() {
        let shape = Shape::Disc(Disc::new(Vec2::ZERO, -1.0));
        assert!(Collider::new(shape, false).is_err());
    }

    #[test]
    fn test_ownerless_world_shape_is_local() {
        let collider = disc_collider();
        let t = Transform::new(Vec2::new(10.0, 10.0), 45.0);
        assert_eq!(collider.world_shape(Some(&t)), *collider.local_shape());
        assert_eq!(collider.world_shape(None), *collider.local_shape());
    }

    #[test]
    fn test_owned_world_shape_follows_transform() {
        let mut bodies: SlotMap<BodyHandle, ()> = SlotMap::with_key();
        let mut collider = disc_collider();
        collider.set_body(Some(bodies.insert(())));
        let t = Transform::new(Vec2::new(0.0, 3.0), 90.0);
        match collider.world_shape(Some(&t)) {
            Shape::Disc(d) => {
                assert_abs_diff_eq!(d.center.x, 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(d.center.y, 4.0, epsilon = 1e-12);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_ownerless_inertia_is_placeholder() {
        assert_eq!(disc_collider().moment_of_inertia(5.0), INERTIA_PLACEHOLDER);
    }

    #[test]
    fn test_owned_inertia_uses_shape() {
        let mut bodies: SlotMap<BodyHandle, ()> = SlotMap::with_key();
        let shape = Shape::AxisAlignedBox(AxisAlignedBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0)));
        let mut collider = Collider::new(shape, false).unwrap();
        collider.set_body(Some(bodies.insert(())));
        assert_abs_diff_eq!(collider.moment_of_inertia(3.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_trigger_clears_overlaps() {
        let mut others: SlotMap<ColliderHandle, ()> = SlotMap::with_key();
        let mut collider = disc_collider();
        collider.set_trigger(true);
        let other = others.insert(());
        assert!(collider.record_overlap(other));
        assert!(!collider.record_overlap(other));
        assert!(collider.is_overlapping(other));
        collider.set_trigger(false);
        assert!(!collider.is_overlapping(other));
    }
}
