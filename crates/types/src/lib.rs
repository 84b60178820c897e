//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! used by the engine, the terminal view and the input mapper alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (a ruleset may override them):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Default Ruleset
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor |
//! | `LEVEL_SPEED_DECREASE_MS` | 100 | Interval reduction per level |
//! | `CLEAR_ANIMATION_MS` | 500 | Line clear fade duration |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//! | `SOFT_DROP_BONUS` | 1 | Points per soft-dropped cell |
//! | `HARD_DROP_BONUS` | 2 | Points per hard-dropped cell |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::ALL[piece.index()], piece);
//! assert_eq!(piece.rgb(), (128, 0, 128));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u16 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const INITIAL_FALL_MS: u32 = 1000;

/// Gravity never gets faster than this
pub const MIN_FALL_MS: u32 = 100;

/// Gravity interval reduction per level gained
pub const LEVEL_SPEED_DECREASE_MS: u32 = 100;

/// Duration of the line clear fade before rows are removed
pub const CLEAR_ANIMATION_MS: u32 = 500;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell for a successful soft drop step
pub const SOFT_DROP_BONUS: u32 = 1;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_BONUS: u32 = 2;

/// Line clear scoring table, indexed by `lines - 1`
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Rotation kick offsets, tried in order after a clockwise rotation
pub const ROTATION_KICKS: [(i32, i32); 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// Frame interval used by the terminal runner (~60 FPS)
pub const TICK_MS: u32 = 16;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Display color for each kind, indexed by [`PieceKind::index`]
const PIECE_COLORS: [(u8, u8, u8); 7] = [
    (0, 255, 255),
    (255, 255, 0),
    (128, 0, 128),
    (0, 255, 0),
    (255, 0, 0),
    (0, 0, 255),
    (255, 165, 0),
];

impl PieceKind {
    /// All kinds, in ordinal order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Ordinal used to index per-kind tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display color as `(r, g, b)`. Has no gameplay meaning.
    pub fn rgb(self) -> (u8, u8, u8) {
        PIECE_COLORS[self.index()]
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Logical keys delivered by the presentation layer
///
/// These are device independent; the terminal mapper and tests both speak
/// in terms of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, scoring the soft drop bonus
    SoftDrop,
    /// Rotate piece 90° clockwise (with kicks)
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Stash the current piece (once per piece)
    Hold,
    /// Toggle pause
    Pause,
    /// Show or hide the ghost piece
    ToggleGhost,
    /// Start over after a game over
    Restart,
    /// Leave the game
    Quit,
}

/// Session-level state
///
/// The session decides which inputs and which timed updates reach the
/// engine:
///
/// | State | Per-tick update | Accepted keys |
/// |-------|-----------------|---------------|
/// | `Playing` | gravity | all gameplay keys, pause |
/// | `Paused` | none | pause |
/// | `LineClearing` | clear animation | none |
/// | `GameOver` | none | restart |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Playing,
    Paused,
    LineClearing,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Playing => "playing",
            SessionState::Paused => "paused",
            SessionState::LineClearing => "line_clearing",
            SessionState::GameOver => "game_over",
        }
    }
}

/// Result of feeding one key to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
