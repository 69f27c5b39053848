//! Error types for the physics core.

use thiserror::Error;

/// Errors returned by world factories and handle-based operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be finite and strictly positive.
    #[error("invalid mass {0}: must be finite and greater than zero")]
    InvalidMass(f64),

    /// Shape parameters are negative, non-finite or describe an empty shape.
    #[error("invalid shape: {reason}")]
    InvalidShape {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// The body handle does not refer to a body in this world.
    #[error("body handle does not refer to a live body")]
    UnknownBody,

    /// The collider handle does not refer to a collider in this world.
    #[error("collider handle does not refer to a live collider")]
    UnknownCollider,

    /// The target was already marked for removal and only awaits cleanup.
    #[error("target is pending removal")]
    PendingRemoval,

    /// The collider is owned by another body and must be detached first.
    #[error("collider is already attached to another body")]
    ColliderAlreadyAttached,
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

impl PhysicsError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        PhysicsError::InvalidShape {
            reason: reason.into(),
        }
    }
}
