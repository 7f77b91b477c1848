//! End-to-end runs through the public `Game` API

use pit_runner::sim::{AssetId, FixedSpawn, SpawnKind};
use pit_runner::{EndCause, Game, GameEvent, GamePhase, InputEvent, Tuning};

fn game_with(kind: SpawnKind) -> Game {
    let mut game = Game::with_policy(Tuning::default(), Box::new(FixedSpawn(kind))).unwrap();
    assert!(game.start());
    game
}

#[test]
fn forced_obstacle_spawns_at_right_edge_and_scrolls() {
    let mut game = game_with(SpawnKind::Obstacle(AssetId(0)));
    let width = game.tuning().world_width;
    let speed = game.tuning().base_obstacle_speed;
    assert_eq!(speed, 3.0);

    for _ in 0..99 {
        assert_eq!(game.advance_tick(), None);
    }
    assert!(game.state().obstacles.is_empty());

    // Spawned at x = width on tick 100, scrolled once in the same tick
    game.advance_tick();
    assert_eq!(game.state().obstacles.len(), 1);
    assert_eq!(game.state().obstacles[0].rect.left(), width - speed);

    for n in 2..=20 {
        game.advance_tick();
        assert_eq!(game.state().obstacles.len(), 1);
        assert_eq!(game.state().obstacles[0].rect.left(), width - speed * n as f32);
    }
    assert_eq!(game.snapshot().obstacles[0].asset, AssetId(0));
}

#[test]
fn pit_under_grounded_player_ends_run_once() {
    let mut game = game_with(SpawnKind::Pit);
    // Let the first pit arrive under the player
    let mut events = Vec::new();
    for _ in 0..1000 {
        if let Some(event) = game.advance_tick() {
            events.push(event);
        }
    }
    assert_eq!(
        events,
        vec![GameEvent::RunEnded {
            cause: EndCause::PitFall,
            score: 0
        }]
    );
    assert_eq!(game.phase(), GamePhase::GameOver);

    // The oldest pit overlaps the player; later spawns are still on screen
    let snap = game.snapshot();
    assert_eq!(snap.pits.len(), 3);
    let pit = snap.pits[0];
    assert!(snap.player.right() > pit.left() && snap.player.left() < pit.right());
}

#[test]
fn double_jump_then_third_is_ignored() {
    let mut game = game_with(SpawnKind::Pit);
    let impulse = game.tuning().jump_impulse;

    assert!(game.handle_input(InputEvent::Jump));
    assert_eq!(game.state().player.vel_y, impulse);
    assert_eq!(game.state().player.jumps, 1);

    for _ in 0..10 {
        game.advance_tick();
    }
    assert!(game.state().player.vel_y > impulse);

    assert!(game.handle_input(InputEvent::Jump));
    assert_eq!(game.state().player.vel_y, impulse);
    assert_eq!(game.state().player.jumps, 2);

    game.advance_tick();
    let vel = game.state().player.vel_y;
    assert!(!game.handle_input(InputEvent::Jump));
    assert_eq!(game.state().player.vel_y, vel);
    assert_eq!(game.state().player.jumps, 2);
}

#[test]
fn jumping_clears_a_pit() {
    let mut game = game_with(SpawnKind::Pit);
    for _ in 0..100 {
        game.advance_tick();
    }
    assert_eq!(game.state().pits.len(), 1);

    // Jump when the pit is a few ticks from the player, double jump at the top
    let mut jumped_twice = false;
    for _ in 0..400 {
        let pit = game.state().pits.first().map(|p| p.x);
        let player = game.state().player.clone();
        if let Some(x) = pit {
            let gap = x - player.rect().right();
            if player.jumps == 0 && gap > 0.0 && gap < 10.0 {
                assert!(game.handle_input(InputEvent::Jump));
            } else if player.jumps == 1 && player.vel_y >= 0.0 && !jumped_twice {
                assert!(game.handle_input(InputEvent::Jump));
                jumped_twice = true;
            }
        }
        assert_eq!(game.advance_tick(), None, "fell into the pit");
        if game.score() == 1 {
            break;
        }
    }
    assert!(jumped_twice);
    assert_eq!(game.score(), 1);
}

#[test]
fn speed_ramps_on_schedule() {
    // Nothing spawns in this window
    let tuning = Tuning {
        spawn_interval_ticks: 10_000,
        ..Default::default()
    };
    let base = tuning.base_obstacle_speed;
    let step = tuning.speed_increment;
    let mut game = Game::with_policy(tuning, Box::new(FixedSpawn(SpawnKind::Pit))).unwrap();
    game.start();

    for tick in 1..=1900u64 {
        let before = game.state().obstacle_speed;
        assert_eq!(game.advance_tick(), None);
        let after = game.state().obstacle_speed;
        if tick % 600 == 0 {
            assert_eq!(after, before + step, "tick {tick}");
        } else {
            assert_eq!(after, before, "tick {tick}");
        }
    }
    assert_eq!(game.state().obstacle_speed, base + 3.0 * step);
}

#[test]
fn restart_resets_everything() {
    let mut game = game_with(SpawnKind::Obstacle(AssetId(0)));
    game.handle_input(InputEvent::RightPressed);
    let generation = game.timer_generation();
    game.advance_second(generation);

    let mut ended = false;
    for _ in 0..1000 {
        if game.advance_tick().is_some() {
            ended = true;
            break;
        }
    }
    assert!(ended);
    assert!(game.state().frame_count > 0);
    assert!(!game.state().obstacles.is_empty());

    assert!(game.restart());
    let tuning = game.tuning().clone();
    let state = game.state();
    assert_eq!(state.player.pos, tuning.player_start());
    assert_eq!(state.player.vel_y, 0.0);
    assert_eq!(state.player.jumps, 0);
    assert!(state.obstacles.is_empty());
    assert!(state.pits.is_empty());
    assert_eq!(state.frame_count, 0);
    assert_eq!(state.score, 0);
    assert_eq!(state.obstacle_speed, tuning.base_obstacle_speed);
    assert!(!state.is_game_over());
    assert_eq!(game.elapsed_secs(), 0);
    assert!(!game.is_timer_current(generation));
}
