//! Render snapshot
//!
//! A copy of everything a frontend draws, built after a tick completes. The
//! renderer never touches `GameState` directly.

use serde::{Deserialize, Serialize};

use crate::sim::{AssetId, GamePhase, GameState, Rect};
use crate::tuning::Tuning;

/// An obstacle box and the visual to draw in it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSprite {
    pub rect: Rect,
    pub asset: AssetId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub world_width: f32,
    pub world_height: f32,
    /// Ground strip
    pub ground: Rect,
    pub player: Rect,
    pub obstacles: Vec<ObstacleSprite>,
    /// Pit boxes span the ground strip
    pub pits: Vec<Rect>,
    pub score: u64,
    pub elapsed_secs: u64,
    pub phase: GamePhase,
}

impl RenderSnapshot {
    pub fn build(state: &GameState, tuning: &Tuning, elapsed_secs: u64) -> Self {
        Self {
            world_width: tuning.world_width,
            world_height: tuning.world_height(),
            ground: Rect::new(0.0, tuning.ground_y, tuning.world_width, tuning.ground_height),
            player: state.player.rect(),
            obstacles: state
                .obstacles
                .iter()
                .map(|ob| ObstacleSprite {
                    rect: ob.rect,
                    asset: ob.asset,
                })
                .collect(),
            pits: state.pits.iter().map(|pit| pit.rect(tuning)).collect(),
            score: state.score,
            elapsed_secs,
            phase: state.phase,
        }
    }

    /// Score line for the HUD
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Timer line for the HUD
    pub fn timer_text(&self) -> String {
        format!("Time: {}s", self.elapsed_secs)
    }
}
