//! Collision detection between the player and the registries
//!
//! Obstacles are solid boxes tested with a strict AABB overlap. Pits have no
//! vertical extent: they only catch a player who is standing on the ground
//! while horizontally over them, so a player in the air clears any pit.

use super::state::{EndCause, GameState, Obstacle, Pit};
use crate::tuning::Tuning;

/// First obstacle overlapping the player, if any
pub fn hit_obstacle(state: &GameState) -> Option<&Obstacle> {
    let player = state.player.rect();
    state.obstacles.iter().find(|ob| player.overlaps(&ob.rect))
}

/// First pit the player is standing over, if any
pub fn pit_under_player<'a>(state: &'a GameState, tuning: &Tuning) -> Option<&'a Pit> {
    if !state.player.on_ground(tuning.ground_y) {
        return None;
    }
    let player = state.player.rect();
    state
        .pits
        .iter()
        .find(|pit| player.overlaps_horizontally(&pit.rect(tuning)))
}

/// Check whether the current state ends the run. Obstacles are checked first.
pub fn detect(state: &GameState, tuning: &Tuning) -> Option<EndCause> {
    if hit_obstacle(state).is_some() {
        return Some(EndCause::ObstacleCollision);
    }
    if pit_under_player(state, tuning).is_some() {
        return Some(EndCause::PitFall);
    }
    None
}
