//! Game balance constants
//!
//! Loaded from JSON (missing fields fall back to defaults) and validated once
//! before a run is constructed. A run never sees an invalid tuning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Every number the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    /// Top edge of the ground strip
    pub ground_y: f32,
    /// Thickness of the ground strip (drawn only)
    pub ground_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_start_x: f32,
    pub move_step: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_jumps: u8,

    // === Spawning ===
    pub spawn_interval_ticks: u64,
    /// Probability that a spawn produces a pit instead of an obstacle
    pub pit_chance: f32,
    pub pit_width: f32,
    pub obstacle_size: f32,
    /// Number of distinct obstacle visuals to pick from
    pub obstacle_variants: u16,

    // === Difficulty ramp ===
    pub base_obstacle_speed: f32,
    pub speed_ramp_interval_ticks: u64,
    pub speed_increment: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            ground_y: GROUND_Y,
            ground_height: GROUND_HEIGHT,

            player_size: PLAYER_SIZE,
            player_start_x: PLAYER_START_X,
            move_step: MOVE_STEP,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_jumps: MAX_JUMPS,

            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            pit_chance: PIT_CHANCE,
            pit_width: PIT_WIDTH,
            obstacle_size: OBSTACLE_SIZE,
            obstacle_variants: 1,

            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            speed_ramp_interval_ticks: SPEED_RAMP_INTERVAL_TICKS,
            speed_increment: SPEED_INCREMENT,
        }
    }
}

impl Tuning {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("world_width", self.world_width)?;
        positive("ground_y", self.ground_y)?;
        in_range("ground_height", self.ground_height, 0.0, f32::MAX)?;

        positive("player_size", self.player_size)?;
        in_range(
            "player_size",
            self.player_size,
            0.0,
            self.world_width.min(self.ground_y),
        )?;
        in_range(
            "player_start_x",
            self.player_start_x,
            0.0,
            self.world_width - self.player_size,
        )?;
        in_range("move_step", self.move_step, 0.0, self.world_width)?;
        positive("gravity", self.gravity)?;
        // Upward is negative y
        positive("-jump_impulse", -self.jump_impulse)?;
        // Ground jump plus at most one mid-air jump
        if self.max_jumps == 0 || self.max_jumps > MAX_JUMPS {
            return Err(TuningError::OutOfRange {
                field: "max_jumps",
                value: f32::from(self.max_jumps),
                min: 1.0,
                max: f32::from(MAX_JUMPS),
            });
        }

        if self.spawn_interval_ticks == 0 {
            return Err(TuningError::Zero {
                field: "spawn_interval_ticks",
            });
        }
        in_range("pit_chance", self.pit_chance, 0.0, 1.0)?;
        positive("pit_width", self.pit_width)?;
        positive("obstacle_size", self.obstacle_size)?;
        in_range("obstacle_size", self.obstacle_size, 0.0, self.ground_y)?;
        if self.obstacle_variants == 0 {
            return Err(TuningError::Zero {
                field: "obstacle_variants",
            });
        }

        positive("base_obstacle_speed", self.base_obstacle_speed)?;
        if self.speed_ramp_interval_ticks == 0 {
            return Err(TuningError::Zero {
                field: "speed_ramp_interval_ticks",
            });
        }
        in_range("speed_increment", self.speed_increment, 0.0, f32::MAX)?;

        Ok(())
    }

    /// Full canvas height (ground strip included)
    pub fn world_height(&self) -> f32 {
        self.ground_y + self.ground_height
    }

    /// Where the player stands at the start of every run
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start_x, self.ground_y - self.player_size)
    }

    /// Obstacles sit on the ground
    pub fn obstacle_y(&self) -> f32 {
        self.ground_y - self.obstacle_size
    }

    /// Rightmost x the player may occupy
    pub fn max_player_x(&self) -> f32 {
        self.world_width - self.player_size
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "pit_chance": 0.5, "obstacle_variants": 3 }"#).unwrap();
        assert_eq!(tuning.pit_chance, 0.5);
        assert_eq!(tuning.obstacle_variants, 3);
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = Tuning {
            pit_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TuningError::OutOfRange { field: "pit_chance", .. })
        ));

        let bad = Tuning {
            jump_impulse: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TuningError::NonPositive { field: "-jump_impulse", .. })
        ));

        let bad = Tuning {
            spawn_interval_ticks: 0,
            ..Default::default()
        };
        assert_eq!(
            bad.validate(),
            Err(TuningError::Zero {
                field: "spawn_interval_ticks"
            })
        );

        let bad = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(bad.validate().is_err());

        let bad = Tuning {
            player_start_x: 790.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_jump_allowance_capped_at_double_jump() {
        for max_jumps in [0, 3, 5] {
            let bad = Tuning {
                max_jumps,
                ..Default::default()
            };
            assert!(matches!(
                bad.validate(),
                Err(TuningError::OutOfRange { field: "max_jumps", .. })
            ));
        }
        let single = Tuning {
            max_jumps: 1,
            ..Default::default()
        };
        assert_eq!(single.validate(), Ok(()));
        assert!(Tuning::from_json(r#"{ "max_jumps": 5 }"#).is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("invalid tuning"));
    }

    #[test]
    fn test_derived_geometry() {
        let tuning = Tuning::default();
        assert_eq!(tuning.world_height(), 400.0);
        assert_eq!(tuning.player_start(), Vec2::new(50.0, 310.0));
        assert_eq!(tuning.obstacle_y(), 320.0);
        assert_eq!(tuning.max_player_x(), 750.0);
    }
}
