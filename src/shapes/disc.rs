use crate::math::{Transform, Vec2};
use serde::{Deserialize, Serialize};

use super::{OrientedBox, RoundedBox};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f64,
}

impl Disc {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// `0.5·m·r²` plus the parallel-axis term for the centre's offset from the body origin.
    pub fn moment_of_inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius + mass * self.center.magnitude_squared()
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::new(
            transform.apply(self.center),
            self.radius * transform.scale.abs(),
        )
    }

    pub fn to_rounded_box(&self) -> RoundedBox {
        RoundedBox::from_parts(
            OrientedBox::new(self.center, Vec2::RIGHT, Vec2::ZERO),
            self.radius,
        )
    }
}
