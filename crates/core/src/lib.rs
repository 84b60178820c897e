//! Core game rules - pure, deterministic, and testable
//!
//! This crate holds the leaf pieces of the falling-block game: the grid, the
//! tetromino shapes, the ruleset and the scoring formulas. It has no
//! dependencies on UI, terminal or timing code.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision tests and line clearing
//! - [`piece`]: tetromino shape matrices and rotation
//! - [`config`]: the immutable ruleset and its validation
//! - [`rng`]: seeded uniform piece generation
//! - [`scoring`]: line clear points, levels and gravity speed
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, Piece};
//! use blockfall_core::types::PieceKind;
//!
//! let mut board = Board::new(10, 20);
//! let mut piece = Piece::spawn(PieceKind::O, board.width());
//!
//! while board.is_valid_position(&piece, 0, 1) {
//!     piece.translate(0, 1);
//! }
//! board.lock(&piece);
//!
//! assert!(board.is_occupied(4, 19));
//! assert!(board.find_full_rows().is_empty());
//! ```

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use piece::{Piece, Shape};
pub use rng::PieceSource;
