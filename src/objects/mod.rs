pub mod collider;
pub mod description;
pub mod handles;
pub mod rigid_body;

pub use collider::{Collider, ColliderEvents};
pub use description::{BodyDescription, ColliderDescription};
pub use handles::{BodyHandle, ColliderHandle};
pub use rigid_body::{AxisLocks, OwnerBinding, OwnerId, RigidBody, SharedTransform, SimulationKind};
