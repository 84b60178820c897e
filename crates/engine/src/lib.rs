//! Game engine - piece lifecycle and session flow
//!
//! [`Engine`] runs the falling-block rules on top of `blockfall-core`:
//! spawning, movement, rotation with kicks, drops, locking, line clears with
//! a timed animation, hold, ghost projection and gravity.
//!
//! [`Session`] wraps an engine with the pause/clearing/game-over state
//! machine and is what a frontend drives, one tick at a time:
//!
//! ```
//! use blockfall_engine::Session;
//! use blockfall_engine::types::{Flow, LogicalKey, SessionState};
//!
//! let mut session = Session::new(7);
//! assert_eq!(session.step(&[LogicalKey::Pause], 16), Flow::Continue);
//! assert_eq!(session.state(), SessionState::Paused);
//! assert_eq!(session.step(&[LogicalKey::Quit], 16), Flow::Quit);
//! ```

pub mod engine;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::{Engine, GravityOutcome, LockOutcome};
pub use session::Session;
