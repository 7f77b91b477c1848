//! Player integration: horizontal steps, gravity, bounds and ground contact

use super::state::Player;
use crate::tuning::Tuning;

/// Held movement keys for a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the player by one tick
pub fn integrate(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    // Both held cancels out
    if input.left {
        player.pos.x -= tuning.move_step;
    }
    if input.right {
        player.pos.x += tuning.move_step;
    }

    player.vel_y += tuning.gravity;
    player.pos.y += player.vel_y;

    player.pos.x = player.pos.x.clamp(0.0, tuning.max_player_x());

    if player.on_ground(tuning.ground_y) {
        player.pos.y = tuning.ground_y - player.size.y;
        player.vel_y = 0.0;
        player.jumps = 0;
    }
}

/// Apply a jump if the player still has one left. Returns whether it applied.
///
/// Only ground contact refills jumps, so a second jump is allowed at any point
/// of the first one's arc and a third is always refused.
pub fn try_jump(player: &mut Player, tuning: &Tuning) -> bool {
    if player.jumps >= tuning.max_jumps {
        return false;
    }
    player.vel_y = tuning.jump_impulse;
    player.jumps += 1;
    true
}
