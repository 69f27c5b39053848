use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Tunables of a [`PhysicsWorld`](super::PhysicsWorld).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World gravity, added to every dynamic body's frame force after per-axis scaling.
    pub gravity: Vec2,
    /// Longest step the world will take. Larger `dt` values are clamped to this.
    pub max_step: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.8),
            max_step: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: WorldConfig = serde_json::from_str(r#"{ "max_step": 0.05 }"#).unwrap();
        assert_eq!(config.gravity, Vec2::new(0.0, -9.8));
        assert_eq!(config.max_step, 0.05);
    }
}
