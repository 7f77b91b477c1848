//! Run controller
//!
//! `Game` owns the whole simulation and is the only thing a frontend talks
//! to. Frontends drive it through explicit entry points:
//! - `handle_input` for key/touch events
//! - `advance_tick` once per presented frame while `wants_frames()` is true
//! - `advance_second` from a one-second timer tagged with `timer_generation()`
//! - `start` once, then `restart` after each game over
//!
//! Phase transitions:
//! - `Ready --start--> Running`
//! - `Running --collision / pit fall--> GameOver`
//! - `GameOver --restart--> Running`
//!
//! Anything else is a no-op that reports `false`.

use crate::error::TuningError;
use crate::sim::{
    self, GameEvent, GamePhase, GameState, RandomSpawn, SpawnPolicy, TickInput,
};
use crate::snapshot::RenderSnapshot;
use crate::tuning::Tuning;

/// Discrete input from the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LeftPressed,
    LeftReleased,
    RightPressed,
    RightReleased,
    /// Edge-triggered; each event spends one jump
    Jump,
}

/// One game session: run state plus clock and timer bookkeeping
pub struct Game {
    tuning: Tuning,
    state: GameState,
    policy: Box<dyn SpawnPolicy>,
    /// Currently held movement keys
    input: TickInput,
    elapsed_secs: u64,
    /// Identifies the one-second timer that belongs to the current run
    timer_generation: u64,
}

impl Game {
    /// Create a session with the seeded random spawn policy
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_policy(tuning, Box::new(RandomSpawn::new(seed)))
    }

    /// Create a session with a custom spawn policy
    pub fn with_policy(tuning: Tuning, policy: Box<dyn SpawnPolicy>) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = GameState::new(&tuning);
        Ok(Self {
            tuning,
            state,
            policy,
            input: TickInput::default(),
            elapsed_secs: 0,
            timer_generation: 0,
        })
    }

    /// Begin the first run. Only valid from `Ready`.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::Ready {
            return false;
        }
        self.begin_run();
        log::info!("Run started");
        true
    }

    /// Begin a fresh run after a game over. Ignored in any other phase.
    pub fn restart(&mut self) -> bool {
        if !self.state.is_game_over() {
            log::debug!("Restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.begin_run();
        log::info!("Run restarted");
        true
    }

    fn begin_run(&mut self) {
        self.state.reset(&self.tuning);
        self.elapsed_secs = 0;
        // Any timer from the previous life is now stale
        self.timer_generation += 1;
    }

    /// Apply an input event. Returns `false` for a refused jump.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::LeftPressed => self.input.left = true,
            InputEvent::LeftReleased => self.input.left = false,
            InputEvent::RightPressed => self.input.right = true,
            InputEvent::RightReleased => self.input.right = false,
            InputEvent::Jump => {
                if self.state.phase != GamePhase::Running {
                    return false;
                }
                return sim::try_jump(&mut self.state.player, &self.tuning);
            }
        }
        true
    }

    /// Advance one tick. Returns the terminal event on the tick that ends the
    /// run; after that no more ticks are processed until `restart`.
    pub fn advance_tick(&mut self) -> Option<GameEvent> {
        let event = sim::tick(
            &mut self.state,
            &self.input,
            self.policy.as_mut(),
            &self.tuning,
        )?;
        self.timer_generation += 1;
        let GameEvent::RunEnded { cause, score } = event;
        log::info!(
            "Game over ({:?}) after {} ticks, {}s, score {}",
            cause,
            self.state.frame_count,
            self.elapsed_secs,
            score
        );
        Some(event)
    }

    /// Count one elapsed second if `generation` belongs to the current run
    pub fn advance_second(&mut self, generation: u64) -> bool {
        if !self.is_timer_current(generation) {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Whether a timer tagged with `generation` should keep running
    pub fn is_timer_current(&self, generation: u64) -> bool {
        generation == self.timer_generation && self.state.phase == GamePhase::Running
    }

    /// Tag for the one-second timer of the current run
    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    /// Whether the frontend should keep requesting frames
    pub fn wants_frames(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Read-only view of the post-tick state
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::build(&self.state, &self.tuning, self.elapsed_secs)
    }
}
