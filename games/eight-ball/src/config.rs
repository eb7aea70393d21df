//! Tunable parameters for table, physics, cue, predictor and shot settling.
//!
//! Every section is `#[serde(default)]`, so a settings JSON only needs the
//! keys it overrides. Lengths are nominal and scaled by `table.scale` when
//! the [`crate::table::Table`] is built.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub table: TableConfig,
    pub physics: PhysicsConfig,
    pub cue: CueConfig,
    pub predictor: PredictorConfig,
    pub settle: SettleConfig,
}

impl PoolConfig {
    /// Parse settings from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// How rails push balls back onto the cloth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CushionModel {
    /// Pocket-gapped rail segments with reflection about the contact normal.
    #[default]
    Segments,
    /// Axis-aligned interior box, skipped while a ball is near a pocket.
    Box,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Uniform scale applied to every nominal length (1.0 = 840 x 490 interior).
    pub scale: f32,
    pub ball_radius: f32,
    /// Visual pocket radius.
    pub pocket_radius: f32,
    /// Capture radius as a fraction of the visual pocket radius.
    pub capture_ratio: f32,
    /// How far pocket centres sit beyond the rail line.
    pub pocket_offset: f32,
    pub cushion_model: CushionModel,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            ball_radius: 12.0,
            pocket_radius: 20.0,
            capture_ratio: 0.8,
            pocket_offset: 8.0,
            cushion_model: CushionModel::Segments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity retained per tick.
    pub friction: f32,
    /// Per-axis speed below which a velocity component snaps to zero.
    pub min_velocity: f32,
    /// Ball-ball restitution.
    pub restitution: f32,
    /// Speed retained after a cushion reflection.
    pub cushion_restitution: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.994,
            min_velocity: 0.03,
            restitution: 0.98,
            cushion_restitution: 0.98,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    pub max_power: f32,
    /// Power added per tick while the button is held.
    pub charge_rate: f32,
    /// Extra clearance beyond touching when dropping the cue ball in hand.
    pub placement_margin: f32,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            max_power: 20.0,
            charge_rate: 0.4,
            placement_margin: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// March step as a fraction of the ball radius.
    pub step_fraction: f32,
    /// Total trace length across both legs.
    pub max_distance: f32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            step_fraction: 0.5,
            max_distance: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// A shot where every ball is slower than this...
    pub slow_speed: f32,
    /// ...for this many seconds is ended early.
    pub slow_time: f32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            slow_speed: 0.15,
            slow_time: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = PoolConfig::from_json("{}").unwrap();
        assert_eq!(config, PoolConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let json = r#"{
            "table": { "scale": 0.5, "cushion_model": "box" },
            "physics": { "friction": 0.99 }
        }"#;
        let config = PoolConfig::from_json(json).unwrap();
        assert_eq!(config.table.scale, 0.5);
        assert_eq!(config.table.cushion_model, CushionModel::Box);
        assert_eq!(config.table.ball_radius, 12.0);
        assert_eq!(config.physics.friction, 0.99);
        assert_eq!(config.physics.min_velocity, 0.03);
        assert_eq!(config.cue, CueConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PoolConfig::from_json("{ \"table\": ").is_err());
        assert!(PoolConfig::from_json(r#"{ "table": { "cushion_model": "felt" } }"#).is_err());
    }
}
