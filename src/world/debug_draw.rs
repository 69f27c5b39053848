use crate::shapes::Shape;

/// RGBA colour handed to a [`DebugDraw`] implementation.
pub type DebugColor = [f32; 4];

pub const TRIGGER_COLOR: DebugColor = [1.0, 0.85, 0.1, 0.5];
pub const COLLIDING_COLOR: DebugColor = [1.0, 0.2, 0.2, 1.0];
pub const STATIC_COLOR: DebugColor = [0.6, 0.6, 0.6, 1.0];
pub const DYNAMIC_COLOR: DebugColor = [0.2, 0.9, 0.3, 1.0];
pub const DETACHED_COLOR: DebugColor = [0.3, 0.5, 1.0, 1.0];

/// Renderer-side consumer of collider outlines.
pub trait DebugDraw {
    fn draw_shape(&mut self, shape: &Shape, color: DebugColor);
}
