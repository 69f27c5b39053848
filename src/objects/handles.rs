use slotmap::new_key_type;

new_key_type! {
    /// Stable, non-owning reference to a body owned by a `PhysicsWorld`.
    pub struct BodyHandle;
    /// Stable, non-owning reference to a collider owned by a `PhysicsWorld`.
    pub struct ColliderHandle;
}
