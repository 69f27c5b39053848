pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use common::PhysicsMaterial;
pub use error::{PhysicsError, Result};
pub use math::{Transform, Vec2};
pub use objects::{
    AxisLocks, BodyDescription, BodyHandle, Collider, ColliderDescription, ColliderEvents,
    ColliderHandle, OwnerId, RigidBody, SharedTransform, SimulationKind,
};
pub use shapes::{Shape, ShapeKind};
pub use world::{CollisionEvent, CollisionEventSink, EventKind, PhysicsWorld, WorldConfig};
