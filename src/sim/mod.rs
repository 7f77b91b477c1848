//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only (behind `SpawnPolicy`)
//! - Spawn-ordered registries
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod rect;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::detect;
pub use physics::{TickInput, integrate, try_jump};
pub use rect::Rect;
pub use registry::{Scrolling, scroll_and_prune};
pub use spawn::{FixedSpawn, RandomSpawn, SpawnKind, SpawnPolicy};
pub use state::{AssetId, EndCause, GameEvent, GamePhase, GameState, Obstacle, Pit, Player};
pub use tick::tick;
