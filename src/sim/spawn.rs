//! Spawn policy and difficulty ramp
//!
//! What appears at the right edge is decided by a `SpawnPolicy`. The default
//! policy draws from a seeded PCG stream so a run is reproducible from its
//! seed; tests plug in fixed policies.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{AssetId, GameState, Obstacle, Pit};
use crate::tuning::Tuning;

/// What a spawn produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Obstacle(AssetId),
    Pit,
}

/// Decides the kind of each spawn
pub trait SpawnPolicy {
    fn choose(&mut self, tuning: &Tuning) -> SpawnKind;
}

/// Pit with probability `pit_chance`, otherwise an obstacle with a uniformly
/// chosen visual
#[derive(Debug, Clone)]
pub struct RandomSpawn {
    rng: Pcg32,
}

impl RandomSpawn {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SpawnPolicy for RandomSpawn {
    fn choose(&mut self, tuning: &Tuning) -> SpawnKind {
        if self.rng.random::<f32>() < tuning.pit_chance {
            SpawnKind::Pit
        } else {
            let variant = self.rng.random_range(0..tuning.obstacle_variants);
            SpawnKind::Obstacle(AssetId(variant))
        }
    }
}

/// Always produces the same kind
#[derive(Debug, Clone, Copy)]
pub struct FixedSpawn(pub SpawnKind);

impl SpawnPolicy for FixedSpawn {
    fn choose(&mut self, _tuning: &Tuning) -> SpawnKind {
        self.0
    }
}

/// Whether `frame` is a spawn tick
pub fn spawn_due(frame: u64, tuning: &Tuning) -> bool {
    frame > 0 && frame % tuning.spawn_interval_ticks == 0
}

/// Whether `frame` is a speed ramp tick
pub fn ramp_due(frame: u64, tuning: &Tuning) -> bool {
    frame > 0 && frame % tuning.speed_ramp_interval_ticks == 0
}

/// Place a new entity at the right edge of the world
pub fn spawn(state: &mut GameState, kind: SpawnKind, tuning: &Tuning) {
    let x = tuning.world_width;
    match kind {
        SpawnKind::Pit => {
            state.pits.push(Pit {
                x,
                width: tuning.pit_width,
            });
        }
        SpawnKind::Obstacle(asset) => {
            state.obstacles.push(Obstacle {
                rect: Rect::new(
                    x,
                    tuning.obstacle_y(),
                    tuning.obstacle_size,
                    tuning.obstacle_size,
                ),
                asset,
            });
        }
    }
    log::debug!("Tick {}: spawned {:?}", state.frame_count, kind);
}

/// Run the spawn and ramp schedule for the current frame
pub fn run_schedule(state: &mut GameState, policy: &mut dyn SpawnPolicy, tuning: &Tuning) {
    let frame = state.frame_count;
    if spawn_due(frame, tuning) {
        let kind = policy.choose(tuning);
        spawn(state, kind, tuning);
    }
    if ramp_due(frame, tuning) {
        state.obstacle_speed += tuning.speed_increment;
        log::debug!("Tick {}: speed -> {}", frame, state.obstacle_speed);
    }
}
