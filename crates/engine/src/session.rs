//! Session state machine
//!
//! Wraps an [`Engine`] and decides, per [`SessionState`], which keys and
//! which timed updates reach it:
//!
//! | From | Trigger | To |
//! |------|---------|----|
//! | Playing | pause key | Paused |
//! | Playing | lock completed rows | LineClearing |
//! | Playing | spawn blocked | GameOver |
//! | Paused | pause key | Playing |
//! | LineClearing | animation elapsed | Playing (GameOver if the spawn is blocked) |
//! | GameOver | restart key | Playing (after a full reset) |
//!
//! Each state has its own input and update handler; [`Session`] is the
//! single driver that matches on the state and calls them.

use tracing::debug;

use crate::core::{ConfigError, GameConfig, Piece, PieceSource};
use crate::engine::{Engine, GravityOutcome};
use crate::types::{Flow, LogicalKey, SessionState};

/// A running game: engine plus session state
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    state: SessionState,
    show_ghost: bool,
}

impl Session {
    /// New session with the default ruleset
    pub fn new(seed: u64) -> Self {
        Self::from_engine(Engine::new(seed))
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(Engine::with_config(config, seed)?))
    }

    pub fn with_source(config: GameConfig, source: PieceSource) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(Engine::with_source(config, source)?))
    }

    /// Wrap an existing engine, deriving the state from it
    pub fn from_engine(engine: Engine) -> Self {
        let mut session = Self {
            engine,
            state: SessionState::Playing,
            show_ghost: true,
        };
        session.sync_state();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn show_ghost(&self) -> bool {
        self.show_ghost
    }

    /// Ghost projection, if the ghost is enabled and a piece is falling
    pub fn ghost_piece(&self) -> Option<Piece> {
        if !self.show_ghost || self.state == SessionState::LineClearing {
            return None;
        }
        self.engine.ghost_piece()
    }

    /// Process one tick: every queued key first, then the timed update.
    ///
    /// Returns [`Flow::Quit`] as soon as a quit key is seen; keys after it
    /// and the timed update are skipped.
    pub fn step(&mut self, keys: &[LogicalKey], elapsed_ms: u32) -> Flow {
        for &key in keys {
            if self.handle_input(key) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.update(elapsed_ms);
        Flow::Continue
    }

    /// Feed one key to the handler of the current state.
    pub fn handle_input(&mut self, key: LogicalKey) -> Flow {
        if key == LogicalKey::Quit {
            debug!(state = self.state.as_str(), "quit requested");
            return Flow::Quit;
        }

        match self.state {
            SessionState::Playing => self.playing_input(key),
            SessionState::Paused => self.paused_input(key),
            SessionState::LineClearing => {}
            SessionState::GameOver => self.game_over_input(key),
        }
        Flow::Continue
    }

    /// Advance timers of the current state by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        match self.state {
            SessionState::Playing => self.playing_update(elapsed_ms),
            SessionState::LineClearing => self.clearing_update(elapsed_ms),
            SessionState::Paused | SessionState::GameOver => {}
        }
    }

    fn playing_input(&mut self, key: LogicalKey) {
        match key {
            LogicalKey::MoveLeft => {
                self.engine.move_piece(-1, 0);
            }
            LogicalKey::MoveRight => {
                self.engine.move_piece(1, 0);
            }
            LogicalKey::SoftDrop => {
                self.engine.soft_drop();
            }
            LogicalKey::Rotate => {
                self.engine.rotate_piece();
            }
            LogicalKey::HardDrop => {
                self.engine.hard_drop();
                self.sync_state();
            }
            LogicalKey::Hold => {
                self.engine.hold_current_piece();
                self.sync_state();
            }
            LogicalKey::ToggleGhost => {
                self.show_ghost = !self.show_ghost;
            }
            LogicalKey::Pause => self.transition(SessionState::Paused),
            LogicalKey::Restart | LogicalKey::Quit => {}
        }
    }

    fn paused_input(&mut self, key: LogicalKey) {
        if key == LogicalKey::Pause {
            self.transition(SessionState::Playing);
        }
    }

    fn game_over_input(&mut self, key: LogicalKey) {
        if key == LogicalKey::Restart {
            self.engine.reset();
            self.transition(SessionState::Playing);
            self.sync_state();
        }
    }

    fn playing_update(&mut self, elapsed_ms: u32) {
        if let GravityOutcome::Locked(_) = self.engine.advance_gravity(elapsed_ms) {
            self.sync_state();
        }
    }

    fn clearing_update(&mut self, elapsed_ms: u32) {
        if self.engine.advance_clear_animation(elapsed_ms) {
            self.engine.finish_clearing_animation();
            self.transition(SessionState::Playing);
            self.sync_state();
        }
    }

    /// Follow the engine after an operation that may lock or spawn.
    fn sync_state(&mut self) {
        if self.engine.game_over() {
            self.transition(SessionState::GameOver);
        } else if self.engine.is_clearing() {
            self.transition(SessionState::LineClearing);
        }
    }

    fn transition(&mut self, to: SessionState) {
        if self.state != to {
            debug!(from = self.state.as_str(), to = to.as_str(), "session state");
            self.state = to;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
