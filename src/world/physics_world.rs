use slotmap::SlotMap;
use tracing::{debug, trace, trace_span, warn};

use crate::common::PhysicsMaterial;
use crate::error::{PhysicsError, Result};
use crate::integration::integrator;
use crate::math::{Transform, Vec2};
use crate::objects::collider::INERTIA_PLACEHOLDER;
use crate::objects::{
    BodyDescription, BodyHandle, Collider, ColliderHandle, OwnerBinding, OwnerId, RigidBody,
    SharedTransform, SimulationKind,
};
use crate::shapes::{AxisAlignedBox, Disc, RoundedBox, Shape};

use super::config::WorldConfig;
use super::debug_draw::{
    DebugDraw, COLLIDING_COLOR, DETACHED_COLOR, DYNAMIC_COLOR, STATIC_COLOR, TRIGGER_COLOR,
};
use super::events::{CollisionEventSink, IgnoreEvents};
use super::resolution::ResolutionMode;
use super::slot::Slot;

/// Owns every body and collider and advances them together.
///
/// Handles stay valid until the entry they name is destroyed by cleanup, which runs at
/// the start and end of [`step`](PhysicsWorld::step). Removal requests only mark the
/// entry; accessors stop returning it immediately.
pub struct PhysicsWorld {
    pub config: WorldConfig,
    pub(super) bodies: SlotMap<BodyHandle, Slot<RigidBody>>,
    pub(super) colliders: SlotMap<ColliderHandle, Slot<Collider>>,
    // Partitions of the live and pending bodies by current kind, in creation order.
    pub(super) dynamic_bodies: Vec<BodyHandle>,
    pub(super) static_bodies: Vec<BodyHandle>,
    pub(super) events: Box<dyn CollisionEventSink>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Creates an empty world with the default configuration.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: SlotMap::with_key(),
            colliders: SlotMap::with_key(),
            dynamic_bodies: Vec::new(),
            static_bodies: Vec::new(),
            events: Box::new(IgnoreEvents),
        }
    }

    /// Replaces the receiver of hit, enter, stay and exit events.
    pub fn set_event_sink(&mut self, sink: impl CollisionEventSink + 'static) {
        self.events = Box::new(sink);
    }

    // --- Creation --- //

    /// Creates a dynamic body at the origin.
    pub fn create_body(&mut self, mass: f64) -> Result<BodyHandle> {
        self.insert_body(RigidBody::new(mass, SimulationKind::Dynamic)?)
    }

    /// Creates a static body at the origin. Its mass only matters if it is later made dynamic.
    pub fn create_static_body(&mut self, mass: f64) -> Result<BodyHandle> {
        self.insert_body(RigidBody::new(mass, SimulationKind::Static)?)
    }

    fn insert_body(&mut self, body: RigidBody) -> Result<BodyHandle> {
        let kind = body.kind();
        let handle = self.bodies.insert(Slot::new(body));
        self.partition_mut(kind).push(handle);
        debug!(?handle, ?kind, "created body");
        Ok(handle)
    }

    pub fn create_aabb_collider(
        &mut self,
        center: Vec2,
        half_extents: Vec2,
        is_trigger: bool,
    ) -> Result<ColliderHandle> {
        let shape = Shape::AxisAlignedBox(AxisAlignedBox::new(center, half_extents));
        self.insert_collider(Collider::new(shape, is_trigger)?)
    }

    pub fn create_disc_collider(
        &mut self,
        center: Vec2,
        radius: f64,
        is_trigger: bool,
    ) -> Result<ColliderHandle> {
        let shape = Shape::Disc(Disc::new(center, radius));
        self.insert_collider(Collider::new(shape, is_trigger)?)
    }

    pub fn create_rounded_box_collider(
        &mut self,
        center: Vec2,
        right: Vec2,
        half_extents: Vec2,
        radius: f64,
        is_trigger: bool,
    ) -> Result<ColliderHandle> {
        let shape = Shape::RoundedBox(RoundedBox::new(center, right, half_extents, radius));
        self.insert_collider(Collider::new(shape, is_trigger)?)
    }

    fn insert_collider(&mut self, collider: Collider) -> Result<ColliderHandle> {
        let kind = collider.local_shape().kind();
        let handle = self.colliders.insert(Slot::new(collider));
        debug!(?handle, ?kind, "created collider");
        Ok(handle)
    }

    /// Rebuilds a body, and its collider if described, from a persisted description.
    pub fn create_body_from_description(
        &mut self,
        description: &BodyDescription,
    ) -> Result<BodyHandle> {
        let collider = match &description.collider {
            Some(c) => {
                let mut collider = Collider::new(c.to_shape(), c.is_trigger)?;
                collider.events = c.events.clone();
                Some(collider)
            }
            None => None,
        };

        let mut body = RigidBody::new(description.mass, description.kind)?;
        body.transform = description.transform;
        body.velocity = description.velocity;
        body.angular_velocity = description.angular_velocity;
        body.gravity_scale = description.gravity_scale;
        body.material = PhysicsMaterial::new(
            description.restitution,
            description.friction,
            description.linear_drag,
            description.angular_drag,
        );
        body.locks = description.locks();

        let handle = self.insert_body(body)?;
        if let Some(collider) = collider {
            let collider = self.insert_collider(collider)?;
            self.attach(handle, collider)?;
        }
        Ok(handle)
    }

    // --- Attachment --- //

    /// Binds `collider` to `body`. A collider the body already had is detached first.
    pub fn attach(&mut self, body: BodyHandle, collider: ColliderHandle) -> Result<()> {
        let current = self.live_body(body)?.collider();
        match self.live_collider(collider)?.body() {
            Some(owner) if owner == body => return Ok(()),
            Some(_) => return Err(PhysicsError::ColliderAlreadyAttached),
            None => {}
        }

        if let Some(previous) = current {
            debug!(?body, ?previous, "replacing attached collider");
            self.detach(body)?;
        }

        if let Some(slot) = self.colliders.get_mut(collider) {
            slot.value.set_body(Some(body));
        }
        if let Some(slot) = self.bodies.get_mut(body) {
            slot.value.set_collider(Some(collider));
        }
        self.refresh_inertia(body);
        debug!(?body, ?collider, "attached collider");
        Ok(())
    }

    /// Unbinds the body's collider, returning it. The body's inertia falls back to the
    /// placeholder.
    pub fn detach(&mut self, body: BodyHandle) -> Result<Option<ColliderHandle>> {
        let rigid_body = self.live_body_mut(body)?;
        let Some(collider) = rigid_body.collider() else {
            return Ok(None);
        };
        rigid_body.set_collider(None);
        rigid_body.set_moment_of_inertia(INERTIA_PLACEHOLDER);
        if let Some(slot) = self.colliders.get_mut(collider) {
            slot.value.set_body(None);
        }
        debug!(?body, ?collider, "detached collider");
        Ok(Some(collider))
    }

    // --- Removal --- //

    /// Marks the body, and with it its collider, for destruction at the next cleanup.
    /// Marking an already pending body does nothing.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<()> {
        let slot = self.bodies.get_mut(handle).ok_or(PhysicsError::UnknownBody)?;
        if slot.mark_pending() {
            debug!(?handle, "body marked for removal");
        }
        Ok(())
    }

    /// Marks the collider for destruction at the next cleanup.
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> Result<()> {
        let slot = self
            .colliders
            .get_mut(handle)
            .ok_or(PhysicsError::UnknownCollider)?;
        if slot.mark_pending() {
            debug!(?handle, "collider marked for removal");
        }
        Ok(())
    }

    /// Destroys the body and its collider right away. No exit events are raised, but
    /// every trigger forgets the collider.
    pub fn remove_body_immediate_no_cleanup(&mut self, handle: BodyHandle) -> Result<()> {
        let slot = self.bodies.remove(handle).ok_or(PhysicsError::UnknownBody)?;
        self.dynamic_bodies.retain(|&h| h != handle);
        self.static_bodies.retain(|&h| h != handle);

        if let Some(collider) = slot.value.collider() {
            self.colliders.remove(collider);
            for other in self.colliders.values_mut() {
                other.value.forget_overlap(collider);
            }
        }
        debug!(?handle, "body removed without cleanup");
        Ok(())
    }

    // --- Configuration of bodies --- //

    /// Changes the body's kind permanently.
    pub fn set_simulation_kind(&mut self, handle: BodyHandle, kind: SimulationKind) -> Result<()> {
        self.live_body_mut(handle)?.set_kind(kind);
        self.repartition(handle, kind);
        Ok(())
    }

    /// Changes the body's kind until [`restore_simulation_kind`](Self::restore_simulation_kind).
    pub fn override_simulation_kind(
        &mut self,
        handle: BodyHandle,
        kind: SimulationKind,
    ) -> Result<()> {
        self.live_body_mut(handle)?.override_kind(kind);
        self.repartition(handle, kind);
        Ok(())
    }

    pub fn restore_simulation_kind(&mut self, handle: BodyHandle) -> Result<()> {
        let body = self.live_body_mut(handle)?;
        let kind = body.original_kind();
        body.override_kind(kind);
        self.repartition(handle, kind);
        Ok(())
    }

    pub fn set_mass(&mut self, handle: BodyHandle, mass: f64) -> Result<()> {
        self.live_body_mut(handle)?.set_mass(mass)?;
        self.refresh_inertia(handle);
        Ok(())
    }

    /// Ties the body to a scene object's transform. The body takes the owner's transform
    /// now and is synced with it on every step.
    pub fn bind_owner(
        &mut self,
        handle: BodyHandle,
        id: OwnerId,
        transform: SharedTransform,
    ) -> Result<()> {
        let body = self.live_body_mut(handle)?;
        body.set_owner(Some(OwnerBinding { id, transform }));
        body.pull_from_owner();
        Ok(())
    }

    pub fn unbind_owner(&mut self, handle: BodyHandle) -> Result<Option<OwnerBinding>> {
        let body = self.live_body_mut(handle)?;
        let previous = body.owner().cloned();
        body.set_owner(None);
        Ok(previous)
    }

    // --- Accessors --- //

    /// The body, unless it is unknown or pending removal.
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle).and_then(Slot::live)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle).and_then(Slot::live_mut)
    }

    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle).and_then(Slot::live)
    }

    pub fn collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.colliders.get_mut(handle).and_then(Slot::live_mut)
    }

    pub fn is_body_pending_removal(&self, handle: BodyHandle) -> bool {
        self.bodies.get(handle).is_some_and(|slot| !slot.is_live())
    }

    pub fn is_collider_pending_removal(&self, handle: ColliderHandle) -> bool {
        self.colliders.get(handle).is_some_and(|slot| !slot.is_live())
    }

    /// Number of stored bodies, pending ones included.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of stored colliders, pending ones included.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies
            .iter()
            .filter_map(|(handle, slot)| slot.live().map(|body| (handle, body)))
    }

    pub fn colliders(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> + '_ {
        self.colliders
            .iter()
            .filter_map(|(handle, slot)| slot.live().map(|collider| (handle, collider)))
    }

    pub fn dynamic_bodies(&self) -> &[BodyHandle] {
        &self.dynamic_bodies
    }

    pub fn static_bodies(&self) -> &[BodyHandle] {
        &self.static_bodies
    }

    /// The collider's shape in world space.
    pub fn world_shape(&self, handle: ColliderHandle) -> Option<Shape> {
        self.collider(handle)
            .map(|collider| self.world_shape_of(collider))
    }

    pub fn body_description(&self, handle: BodyHandle) -> Result<BodyDescription> {
        let body = self.live_body(handle)?;
        let collider = body
            .collider()
            .and_then(|c| self.colliders.get(c))
            .map(|slot| &slot.value);
        Ok(BodyDescription::from_body(body, collider))
    }

    /// Hands every live collider's world shape to `drawer`, coloured by state.
    pub fn debug_draw(&self, drawer: &mut impl DebugDraw) {
        for (_, collider) in self.colliders() {
            let color = if collider.is_trigger() {
                TRIGGER_COLOR
            } else if collider.is_colliding() {
                COLLIDING_COLOR
            } else {
                match collider.body().and_then(|b| self.body(b)).map(RigidBody::kind) {
                    Some(SimulationKind::Dynamic) => DYNAMIC_COLOR,
                    Some(SimulationKind::Static) => STATIC_COLOR,
                    None => DETACHED_COLOR,
                }
            };
            drawer.draw_shape(&self.world_shape_of(collider), color);
        }
    }

    // --- Simulation --- //

    /// Advances the world by `dt` seconds, clamped to `config.max_step`.
    /// A zero, negative or non-finite `dt` does nothing.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            trace!(dt, "skipping step");
            return;
        }
        let dt = dt.min(self.config.max_step);
        let _span = trace_span!("step", dt).entered();

        self.cleanup();
        self.pull_owner_transforms();
        self.reset_colliding_flags();
        self.integrate_bodies(dt);
        self.resolve_dynamic_static(ResolutionMode::Full);
        self.resolve_dynamic_dynamic();
        self.resolve_dynamic_static(ResolutionMode::PositionOnly);
        self.resolve_triggers();
        self.push_owner_transforms();
        self.cleanup();
    }

    fn pull_owner_transforms(&mut self) {
        for slot in self.bodies.values_mut().filter(|slot| slot.is_live()) {
            slot.value.pull_from_owner();
        }
    }

    fn push_owner_transforms(&mut self) {
        for slot in self.bodies.values().filter(|slot| slot.is_live()) {
            slot.value.push_to_owner();
        }
    }

    fn reset_colliding_flags(&mut self) {
        for slot in self.colliders.values_mut() {
            slot.value.set_colliding(false);
        }
    }

    fn integrate_bodies(&mut self, dt: f64) {
        let gravity = self.config.gravity;
        for slot in self.bodies.values_mut().filter(|slot| slot.is_live()) {
            integrator::integrate(&mut slot.value, gravity, dt);
        }
        trace!(bodies = self.bodies.len(), "integrated");
    }

    // --- Internal helpers --- //

    pub(super) fn world_shape_of(&self, collider: &Collider) -> Shape {
        let owner: Option<&Transform> = collider
            .body()
            .and_then(|b| self.bodies.get(b))
            .map(|slot| &slot.value.transform);
        collider.world_shape(owner)
    }

    fn refresh_inertia(&mut self, handle: BodyHandle) {
        let Some(body) = self.bodies.get(handle).map(|slot| &slot.value) else {
            return;
        };
        let inertia = match body.collider().and_then(|c| self.colliders.get(c)) {
            Some(slot) => slot.value.moment_of_inertia(body.mass()),
            None => INERTIA_PLACEHOLDER,
        };
        if let Some(slot) = self.bodies.get_mut(handle) {
            slot.value.set_moment_of_inertia(inertia);
        }
    }

    fn repartition(&mut self, handle: BodyHandle, kind: SimulationKind) {
        self.dynamic_bodies.retain(|&h| h != handle);
        self.static_bodies.retain(|&h| h != handle);
        self.partition_mut(kind).push(handle);
        self.refresh_inertia(handle);
        debug!(?handle, ?kind, "changed simulation kind");
    }

    fn partition_mut(&mut self, kind: SimulationKind) -> &mut Vec<BodyHandle> {
        match kind {
            SimulationKind::Dynamic => &mut self.dynamic_bodies,
            SimulationKind::Static => &mut self.static_bodies,
        }
    }

    fn live_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        match self.bodies.get(handle) {
            None => Err(PhysicsError::UnknownBody),
            Some(slot) => slot.live().ok_or_else(|| {
                warn!(?handle, "operation on a body pending removal");
                PhysicsError::PendingRemoval
            }),
        }
    }

    fn live_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        match self.bodies.get_mut(handle) {
            None => Err(PhysicsError::UnknownBody),
            Some(slot) => slot.live_mut().ok_or_else(|| {
                warn!(?handle, "operation on a body pending removal");
                PhysicsError::PendingRemoval
            }),
        }
    }

    fn live_collider(&self, handle: ColliderHandle) -> Result<&Collider> {
        match self.colliders.get(handle) {
            None => Err(PhysicsError::UnknownCollider),
            Some(slot) => slot.live().ok_or_else(|| {
                warn!(?handle, "operation on a collider pending removal");
                PhysicsError::PendingRemoval
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_create_body_partitions_by_kind() {
        let mut world = PhysicsWorld::new();
        let a = world.create_body(1.0).unwrap();
        let b = world.create_static_body(1.0).unwrap();
        assert_eq!(world.dynamic_bodies(), &[a]);
        assert_eq!(world.static_bodies(), &[b]);
        assert!(matches!(world.create_body(0.0), Err(PhysicsError::InvalidMass(_))));
        assert_eq!(world.body_count(), 2);
    }

    #[test]
    fn test_attach_sets_inertia() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(2.0).unwrap();
        let disc = world.create_disc_collider(Vec2::ZERO, 1.0, false).unwrap();
        world.attach(body, disc).unwrap();
        assert_eq!(world.body(body).unwrap().collider(), Some(disc));
        assert_eq!(world.collider(disc).unwrap().body(), Some(body));
        assert!((world.body(body).unwrap().moment_of_inertia() - 1.0).abs() < 1e-12);

        world.set_mass(body, 4.0).unwrap();
        assert!((world.body(body).unwrap().moment_of_inertia() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_attach_rejects_collider_of_other_body() {
        let mut world = PhysicsWorld::new();
        let a = world.create_body(1.0).unwrap();
        let b = world.create_body(1.0).unwrap();
        let c = world.create_disc_collider(Vec2::ZERO, 1.0, false).unwrap();
        world.attach(a, c).unwrap();
        assert_eq!(world.attach(b, c), Err(PhysicsError::ColliderAlreadyAttached));
        assert!(world.attach(a, c).is_ok());
    }

    #[test]
    fn test_attach_replaces_previous_collider() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(1.0).unwrap();
        let first = world.create_disc_collider(Vec2::ZERO, 1.0, false).unwrap();
        let second = world.create_aabb_collider(Vec2::ZERO, Vec2::ONE, false).unwrap();
        world.attach(body, first).unwrap();
        world.attach(body, second).unwrap();
        assert_eq!(world.collider(first).unwrap().body(), None);
        assert_eq!(world.body(body).unwrap().collider(), Some(second));
    }

    #[test]
    fn test_detach_restores_placeholder_inertia() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(10.0).unwrap();
        let c = world.create_disc_collider(Vec2::ZERO, 2.0, false).unwrap();
        world.attach(body, c).unwrap();
        assert_eq!(world.detach(body).unwrap(), Some(c));
        assert_eq!(world.body(body).unwrap().moment_of_inertia(), INERTIA_PLACEHOLDER);
        assert_eq!(world.detach(body).unwrap(), None);
    }

    #[test]
    fn test_pending_body_is_hidden_and_rejected() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(1.0).unwrap();
        world.remove_body(body).unwrap();
        world.remove_body(body).unwrap();
        assert!(world.body(body).is_none());
        assert!(world.is_body_pending_removal(body));
        assert_eq!(world.set_mass(body, 2.0), Err(PhysicsError::PendingRemoval));

        world.step(0.01);
        assert!(!world.is_body_pending_removal(body));
        assert_eq!(world.body_count(), 0);
        assert!(world.dynamic_bodies().is_empty());
        assert_eq!(world.remove_body(body), Err(PhysicsError::UnknownBody));
    }

    #[test]
    fn test_set_simulation_kind_moves_partition() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(1.0).unwrap();
        world.set_simulation_kind(body, SimulationKind::Static).unwrap();
        assert!(world.dynamic_bodies().is_empty());
        assert_eq!(world.static_bodies(), &[body]);

        world.override_simulation_kind(body, SimulationKind::Dynamic).unwrap();
        assert_eq!(world.dynamic_bodies(), &[body]);
        world.restore_simulation_kind(body).unwrap();
        assert_eq!(world.static_bodies(), &[body]);
        assert_eq!(world.body(body).unwrap().kind(), SimulationKind::Static);
    }

    #[test]
    fn test_step_ignores_bad_dt() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(1.0).unwrap();
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            world.step(dt);
        }
        assert_eq!(world.body(body).unwrap().position(), Vec2::ZERO);
    }

    #[test]
    fn test_step_clamps_dt() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(1.0).unwrap();
        world.body_mut(body).unwrap().velocity = Vec2::new(1.0, 0.0);
        world.config.gravity = Vec2::ZERO;
        world.step(5.0);
        assert!((world.body(body).unwrap().position().x - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_bind_owner_syncs_both_ways() {
        let mut world = PhysicsWorld::new();
        world.config.gravity = Vec2::ZERO;
        let body = world.create_body(1.0).unwrap();
        let shared = Rc::new(RefCell::new(Transform::new(Vec2::new(2.0, 0.0), 0.0)));
        world.bind_owner(body, OwnerId(3), shared.clone()).unwrap();
        assert_eq!(world.body(body).unwrap().position(), Vec2::new(2.0, 0.0));

        world.body_mut(body).unwrap().velocity = Vec2::new(0.0, 1.0);
        shared.borrow_mut().position = Vec2::new(5.0, 0.0);
        world.step(0.1);
        let position = shared.borrow().position;
        assert!((position.x - 5.0).abs() < 1e-12);
        assert!((position.y - 0.1).abs() < 1e-12);

        let binding = world.unbind_owner(body).unwrap().unwrap();
        assert_eq!(binding.id, OwnerId(3));
    }

    #[derive(Default)]
    struct RecordingDrawer(Vec<(Shape, [f32; 4])>);

    impl DebugDraw for RecordingDrawer {
        fn draw_shape(&mut self, shape: &Shape, color: [f32; 4]) {
            self.0.push((*shape, color));
        }
    }

    #[test]
    fn test_debug_draw_colours_by_state() {
        let mut world = PhysicsWorld::new();
        let floor = world.create_static_body(1.0).unwrap();
        let c = world.create_aabb_collider(Vec2::ZERO, Vec2::new(5.0, 1.0), false).unwrap();
        world.attach(floor, c).unwrap();
        world.create_disc_collider(Vec2::new(0.0, 10.0), 1.0, true).unwrap();

        let mut drawer = RecordingDrawer::default();
        world.debug_draw(&mut drawer);
        assert_eq!(drawer.0.len(), 2);
        assert!(drawer.0.iter().any(|(_, color)| *color == STATIC_COLOR));
        assert!(drawer.0.iter().any(|(_, color)| *color == TRIGGER_COLOR));
    }

    #[test]
    fn test_description_rebuilds_body() {
        let mut world = PhysicsWorld::new();
        let body = world.create_body(3.0).unwrap();
        let c = world
            .create_rounded_box_collider(Vec2::ZERO, Vec2::RIGHT, Vec2::new(1.0, 0.5), 0.2, false)
            .unwrap();
        world.attach(body, c).unwrap();
        world.body_mut(body).unwrap().velocity = Vec2::new(1.0, 2.0);
        world.collider_mut(c).unwrap().events.hit = Some("bump".to_string());

        let description = world.body_description(body).unwrap();
        let copy = world.create_body_from_description(&description).unwrap();

        assert_eq!(world.body_description(copy).unwrap(), description);
        let original = world.body(body).unwrap().moment_of_inertia();
        assert!((world.body(copy).unwrap().moment_of_inertia() - original).abs() < 1e-12);
    }
}
