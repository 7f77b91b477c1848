//! Pit Runner - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `game`: Run controller (start, game over, restart, clock and timer control)
//! - `tuning`: Data-driven game balance, validated at startup
//! - `snapshot`: Read-only view of the post-tick state for renderers
//! - `assets`: Opaque asset ids resolved to resource locations
//! - `renderer`: Canvas 2D drawing (wasm only)
//! - `audio`: Browser audio playback (wasm only)

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod game;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use assets::AssetManifest;
pub use error::TuningError;
pub use game::{Game, InputEvent};
pub use sim::{EndCause, GameEvent, GamePhase};
pub use snapshot::RenderSnapshot;
pub use tuning::Tuning;

/// Default balance constants
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const GROUND_Y: f32 = 360.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 50.0;
    /// Horizontal step per tick while a direction is held
    pub const MOVE_STEP: f32 = 5.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -18.0;
    /// Ground jump plus one mid-air jump
    pub const MAX_JUMPS: u8 = 2;

    /// Spawning
    pub const SPAWN_INTERVAL_TICKS: u64 = 100;
    pub const PIT_CHANCE: f32 = 0.3;
    pub const PIT_WIDTH: f32 = 40.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;

    /// Difficulty ramp
    pub const BASE_OBSTACLE_SPEED: f32 = 3.0;
    pub const SPEED_RAMP_INTERVAL_TICKS: u64 = 600;
    pub const SPEED_INCREMENT: f32 = 0.5;

    /// Nominal frame rate the browser drives ticks at (used by headless drivers)
    pub const NOMINAL_FPS: u64 = 60;
}
