//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::LogicalKey`] and buffers
//! them per tick in a fixed-capacity [`InputQueue`], so the session sees all
//! of a frame's keys before its timed update.

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::InputQueue;
