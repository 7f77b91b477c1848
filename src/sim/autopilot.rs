//! Demo mode - a simple jump heuristic that plays the game
//!
//! Jumps when the next hazard is a few ticks away, and spends the second
//! jump if it is coming down while something is still underneath.

use super::state::GameState;
use crate::tuning::Tuning;

/// How many ticks ahead of contact the autopilot takes off
pub const LEAD_TICKS: f32 = 5.0;

/// Distance from the player's right edge to the nearest hazard ahead of it,
/// counting hazards already under the player as zero
fn nearest_hazard_gap(state: &GameState) -> Option<f32> {
    let player = state.player.rect();
    let obstacle_edges = state.obstacles.iter().map(|ob| (ob.rect.left(), ob.rect.right()));
    let pit_edges = state.pits.iter().map(|pit| (pit.x, pit.x + pit.width));

    obstacle_edges
        .chain(pit_edges)
        .filter(|&(_, right)| right > player.left())
        .map(|(left, _)| (left - player.right()).max(0.0))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Whether the autopilot would press jump this tick
pub fn wants_jump(state: &GameState, tuning: &Tuning) -> bool {
    let Some(gap) = nearest_hazard_gap(state) else {
        return false;
    };
    let lead = state.obstacle_speed * LEAD_TICKS;
    let player = &state.player;

    if player.jumps == 0 {
        gap <= lead
    } else {
        // Falling back down onto something
        let falling = player.vel_y > 0.0;
        let near_ground = player.pos.y + player.size.y > tuning.ground_y - tuning.obstacle_size;
        falling && near_ground && gap <= lead && player.jumps < tuning.max_jumps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pit;

    #[test]
    fn test_waits_until_close() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        assert!(!wants_jump(&state, &tuning));

        state.pits.push(Pit {
            x: 300.0,
            width: 40.0,
        });
        assert!(!wants_jump(&state, &tuning));

        // Player right edge is at 100
        state.pits[0].x = 110.0;
        assert!(wants_jump(&state, &tuning));
    }

    #[test]
    fn test_ignores_hazards_behind() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.pits.push(Pit {
            x: 0.0,
            width: 40.0,
        });
        assert!(!wants_jump(&state, &tuning));
    }
}
