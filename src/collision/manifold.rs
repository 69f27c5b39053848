use crate::math::Vec2;

/// Result of a positive overlap test between two shapes A and B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// Unit collision normal, pointing from shape A towards shape B.
    pub normal: Vec2,
    /// Contact point in world coordinates.
    pub point: Vec2,
    /// How far the shapes overlap along `normal`.
    pub depth: f64,
}

impl Manifold {
    /// The same contact seen from the other shape.
    pub fn flipped(self) -> Self {
        Manifold {
            normal: -self.normal,
            ..self
        }
    }
}
