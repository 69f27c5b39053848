mod cleanup;
pub mod config;
pub mod debug_draw;
pub mod events;
pub mod physics_world;
mod resolution;
pub mod slot;
mod triggers;

pub use config::WorldConfig;
pub use debug_draw::{DebugColor, DebugDraw};
pub use events::{CollisionEvent, CollisionEventSink, EventKind, IgnoreEvents};
pub use physics_world::PhysicsWorld;
pub use slot::SlotState;
