//! Fixed-step simulation tick
//!
//! Order within a tick: player integration, spawn/ramp schedule, scroll and
//! prune, collision check. A collision is the last thing a tick does, so the
//! state a renderer sees after a game-over tick is exactly the colliding one.

use super::collision;
use super::physics::{self, TickInput};
use super::registry::scroll_and_prune;
use super::spawn::{self, SpawnPolicy};
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Advance the run by one tick. Does nothing unless the run is `Running`.
///
/// Returns the terminal event on the tick that ends the run.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    policy: &mut dyn SpawnPolicy,
    tuning: &Tuning,
) -> Option<GameEvent> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.frame_count += 1;

    physics::integrate(&mut state.player, input, tuning);

    spawn::run_schedule(state, policy, tuning);

    let speed = state.obstacle_speed;
    state.score += scroll_and_prune(&mut state.obstacles, speed);
    state.score += scroll_and_prune(&mut state.pits, speed);

    let cause = collision::detect(state, tuning)?;
    state.phase = GamePhase::GameOver;
    Some(GameEvent::RunEnded {
        cause,
        score: state.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::{FixedSpawn, SpawnKind};
    use crate::sim::state::{AssetId, EndCause, Pit};

    fn running() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.reset(&tuning);
        (state, tuning)
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut policy = FixedSpawn(SpawnKind::Pit);

        assert_eq!(tick(&mut state, &TickInput::default(), &mut policy, &tuning), None);
        assert_eq!(state.frame_count, 0);

        state.phase = GamePhase::GameOver;
        assert_eq!(tick(&mut state, &TickInput::default(), &mut policy, &tuning), None);
        assert_eq!(state.frame_count, 0);
    }

    #[test]
    fn test_first_spawn_on_interval() {
        let (mut state, tuning) = running();
        let mut policy = FixedSpawn(SpawnKind::Obstacle(AssetId(0)));

        for _ in 0..99 {
            tick(&mut state, &TickInput::default(), &mut policy, &tuning);
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &TickInput::default(), &mut policy, &tuning);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at the right edge, then scrolled once
        assert_eq!(
            state.obstacles[0].rect.left(),
            tuning.world_width - tuning.base_obstacle_speed
        );
    }

    #[test]
    fn test_pit_under_player_ends_run_once() {
        let (mut state, tuning) = running();
        let mut policy = FixedSpawn(SpawnKind::Pit);
        state.pits.push(Pit {
            x: state.player.pos.x + 3.0,
            width: tuning.pit_width,
        });

        let event = tick(&mut state, &TickInput::default(), &mut policy, &tuning);
        assert_eq!(
            event,
            Some(GameEvent::RunEnded {
                cause: EndCause::PitFall,
                score: 0
            })
        );
        assert_eq!(state.phase, GamePhase::GameOver);

        let frame = state.frame_count;
        let pit_x = state.pits[0].x;
        assert_eq!(tick(&mut state, &TickInput::default(), &mut policy, &tuning), None);
        assert_eq!(state.frame_count, frame);
        assert_eq!(state.pits[0].x, pit_x);
    }

    #[test]
    fn test_pruned_entries_score() {
        let (mut state, tuning) = running();
        let mut policy = FixedSpawn(SpawnKind::Pit);
        state.pits.push(Pit {
            x: -tuning.pit_width + 1.0,
            width: tuning.pit_width,
        });
        state.player.pos.x = 400.0;

        assert_eq!(tick(&mut state, &TickInput::default(), &mut policy, &tuning), None);
        assert_eq!(state.score, 1);
        assert!(state.pits.is_empty());
    }
}
