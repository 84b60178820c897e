//! Ruleset configuration.
//!
//! A [`GameConfig`] is an immutable bundle of every tunable rule: grid size,
//! gravity timing, the line clear animation, the score table and the drop
//! bonuses. The engine takes one by value at construction and never mutates
//! it, so swapping the whole ruleset means building a new engine.

use serde::{Deserialize, Serialize};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, CLEAR_ANIMATION_MS, HARD_DROP_BONUS, INITIAL_FALL_MS,
    LEVEL_SPEED_DECREASE_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS, SOFT_DROP_BONUS,
};

/// Smallest board that can hold every spawn shape.
pub const MIN_BOARD_WIDTH: u16 = 4;
pub const MIN_BOARD_HEIGHT: u16 = 4;

/// Largest board accepted; keeps cell coordinates comfortably inside `i32`.
pub const MAX_BOARD_DIM: u16 = 256;

/// Errors reported when a ruleset cannot drive a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "grid {width}x{height} is too small (minimum {min_w}x{min_h})",
        min_w = MIN_BOARD_WIDTH,
        min_h = MIN_BOARD_HEIGHT
    )]
    GridTooSmall { width: u16, height: u16 },

    #[error("grid {width}x{height} is too large (maximum {max} per side)", max = MAX_BOARD_DIM)]
    GridTooLarge { width: u16, height: u16 },

    #[error("lines_per_level must be at least 1")]
    ZeroLinesPerLevel,

    #[error("min_fall_ms ({min}) must be between 1 and initial_fall_ms ({initial})")]
    FallSpeedRange { min: u32, initial: u32 },

    #[error("clear_animation_ms must be at least 1")]
    ZeroClearAnimation,
}

/// Complete ruleset for one game.
///
/// Missing fields in a serialized config take the default ruleset's value.
///
/// # Examples
///
/// ```
/// use blockfall_core::GameConfig;
///
/// let config = GameConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.line_scores, [100, 300, 500, 800]);
///
/// let narrow = GameConfig { grid_width: 2, ..GameConfig::default() };
/// assert!(narrow.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Gravity interval at level 1, in milliseconds.
    pub initial_fall_ms: u32,
    /// Gravity interval floor, in milliseconds.
    pub min_fall_ms: u32,
    /// Interval reduction per level gained, in milliseconds.
    pub level_speed_decrease_ms: u32,
    pub clear_animation_ms: u32,
    /// Points for clearing 1, 2, 3 and 4 lines at level 1.
    pub line_scores: [u32; 4],
    pub soft_drop_bonus: u32,
    pub hard_drop_bonus: u32,
    pub lines_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: BOARD_WIDTH,
            grid_height: BOARD_HEIGHT,
            initial_fall_ms: INITIAL_FALL_MS,
            min_fall_ms: MIN_FALL_MS,
            level_speed_decrease_ms: LEVEL_SPEED_DECREASE_MS,
            clear_animation_ms: CLEAR_ANIMATION_MS,
            line_scores: LINE_SCORES,
            soft_drop_bonus: SOFT_DROP_BONUS,
            hard_drop_bonus: HARD_DROP_BONUS,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl GameConfig {
    /// Check that the ruleset can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width < MIN_BOARD_WIDTH || height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.min_fall_ms == 0 || self.min_fall_ms > self.initial_fall_ms {
            return Err(ConfigError::FallSpeedRange {
                min: self.min_fall_ms,
                initial: self.initial_fall_ms,
            });
        }
        if self.clear_animation_ms == 0 {
            return Err(ConfigError::ZeroClearAnimation);
        }
        Ok(())
    }
}
