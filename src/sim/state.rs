//! Run state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for the first start
    Ready,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Opaque reference to an obstacle visual, resolved by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u16);

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player box overlapped an obstacle box
    ObstacleCollision,
    /// Player stood on the ground over a pit
    PitFall,
}

/// Events surfaced to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Terminal event, emitted exactly once per run
    RunEnded { cause: EndCause, score: u64 },
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Jumps used since last ground contact
    pub jumps: u8,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start(),
            size: Vec2::splat(tuning.player_size),
            vel_y: 0.0,
            jumps: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Lower edge at or below the ground line
    pub fn on_ground(&self, ground_y: f32) -> bool {
        self.pos.y + self.size.y >= ground_y
    }
}

/// A solid block sitting on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub asset: AssetId,
}

/// A gap in the ground; only its horizontal extent matters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pit {
    pub x: f32,
    pub width: f32,
}

impl Pit {
    /// Box spanning the ground strip under the pit
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.x, tuning.ground_y, self.width, tuning.ground_height)
    }
}

/// Complete run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live pits in spawn order
    pub pits: Vec<Pit>,
    /// Ticks processed this run
    pub frame_count: u64,
    pub score: u64,
    /// Leftward scroll per tick
    pub obstacle_speed: f32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh state in the `Ready` phase
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(tuning),
            obstacles: Vec::new(),
            pits: Vec::new(),
            frame_count: 0,
            score: 0,
            obstacle_speed: tuning.base_obstacle_speed,
            phase: GamePhase::Ready,
        }
    }

    /// Put every run value back to its initial state and enter `Running`
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
        self.phase = GamePhase::Running;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.obstacle_speed, tuning.base_obstacle_speed);
        assert!(state.player.on_ground(tuning.ground_y));
        assert_eq!(state.player.rect().bottom(), tuning.ground_y);
    }

    #[test]
    fn test_reset_clears_run() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::GameOver;
        state.score = 7;
        state.frame_count = 900;
        state.obstacle_speed = 4.5;
        state.player.pos.x = 300.0;
        state.player.jumps = 2;
        state.pits.push(Pit {
            x: 10.0,
            width: 40.0,
        });

        state.reset(&tuning);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.obstacle_speed, tuning.base_obstacle_speed);
        assert_eq!(state.player.pos, tuning.player_start());
        assert_eq!(state.player.jumps, 0);
        assert!(state.pits.is_empty());
        assert!(!state.is_game_over());
    }
}
