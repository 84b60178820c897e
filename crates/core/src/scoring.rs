//! Scoring module - line clear points, levels and gravity speed
//!
//! All rules are pure functions of a [`GameConfig`]:
//! - Clearing `n` lines (1-4) awards `line_scores[n - 1] * level`.
//! - Level is `total_lines / lines_per_level + 1`.
//! - Gravity interval shrinks linearly per level and is clamped at
//!   `min_fall_ms`.
//! - Drops award a fixed bonus per cell travelled.

use crate::config::GameConfig;

/// Points for clearing `lines` rows at `level`. Zero or more than four lines
/// score nothing.
pub fn line_clear_score(config: &GameConfig, lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > config.line_scores.len() {
        return 0;
    }
    config.line_scores[lines - 1].saturating_mul(level)
}

/// Level reached after clearing `total_lines` in total (levels start at 1).
pub fn level_for_lines(config: &GameConfig, total_lines: u32) -> u32 {
    total_lines / config.lines_per_level.max(1) + 1
}

/// Gravity interval in milliseconds at `level`.
pub fn fall_interval_ms(config: &GameConfig, level: u32) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(config.level_speed_decrease_ms);
    config
        .initial_fall_ms
        .saturating_sub(speedup)
        .max(config.min_fall_ms)
}

/// Points for a hard drop of `distance` cells.
pub fn hard_drop_score(config: &GameConfig, distance: u32) -> u32 {
    distance.saturating_mul(config.hard_drop_bonus)
}
