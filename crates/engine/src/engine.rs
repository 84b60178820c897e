//! Engine module - piece lifecycle
//!
//! The engine owns the board, the current/next/held pieces and every
//! counter. A piece lives through:
//!
//! ```text
//! spawn -> falling -> lock -+-> spawn                  (no full rows)
//!                           +-> clearing -> spawn      (after the animation)
//! spawn blocked -> game over (terminal until reset)
//! ```
//!
//! While rows are clearing there is no current piece; the locked cells stay
//! on the board until [`Engine::finish_clearing_animation`] removes them and
//! spawns the next piece. This is the only deferred spawn.

use tracing::{debug, info};

use crate::core::scoring::{fall_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
use crate::core::{Board, ConfigError, GameConfig, Piece, PieceSource};
use crate::types::{PieceKind, ROTATION_KICKS};

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// No rows completed; the next piece spawned.
    Spawned,
    /// Rows completed; spawning waits for the clear animation.
    Clearing { lines: usize },
    /// No rows completed and the next piece could not spawn.
    ToppedOut,
    /// There was no current piece (mid clear animation).
    NothingLocked,
}

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// Interval not reached yet.
    Waiting,
    /// The piece moved down one row.
    Fell,
    /// The piece could not move and was locked.
    Locked(LockOutcome),
}

/// Game engine: board, pieces, counters and timers
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    source: PieceSource,
    current: Option<Piece>,
    next: Piece,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    /// Rows waiting to be removed, top to bottom. Empty unless clearing.
    clearing_rows: Vec<usize>,
    clear_timer_ms: u32,
    game_over: bool,
}

impl Engine {
    /// Create a game with the default ruleset and a uniform piece source
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), PieceSource::uniform(seed))
    }

    /// Create a game with a custom ruleset
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, PieceSource::uniform(seed))
    }

    /// Create a game with a custom ruleset and piece source
    pub fn with_source(config: GameConfig, source: PieceSource) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: GameConfig, mut source: PieceSource) -> Self {
        let board = Board::new(config.grid_width, config.grid_height);
        let next = Piece::spawn(source.draw(), config.grid_width);
        let fall_interval_ms = config.initial_fall_ms;

        let mut engine = Self {
            config,
            board,
            source,
            current: None,
            next,
            hold: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms,
            fall_timer_ms: 0,
            clearing_rows: Vec::new(),
            clear_timer_ms: 0,
            game_over: false,
        };
        engine.spawn_new_piece();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_clearing(&self) -> bool {
        !self.clearing_rows.is_empty()
    }

    /// Rows mid-animation, top to bottom
    pub fn clearing_rows(&self) -> &[usize] {
        &self.clearing_rows
    }

    /// Clear animation progress in `[0, 1]`; 0 when nothing is clearing
    pub fn clear_progress(&self) -> f32 {
        if self.clearing_rows.is_empty() {
            return 0.0;
        }
        (self.clear_timer_ms as f32 / self.config.clear_animation_ms as f32).min(1.0)
    }

    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    /// Promote `next` to current and draw a fresh `next`.
    ///
    /// Returns false (and ends the game) if the new piece does not fit.
    pub fn spawn_new_piece(&mut self) -> bool {
        let fresh = Piece::spawn(self.source.draw(), self.config.grid_width);
        let piece = std::mem::replace(&mut self.next, fresh);
        self.current = Some(piece);
        self.can_hold = true;

        if !self.board.is_valid_position(&piece, 0, 0) {
            self.game_over = true;
            info!(kind = ?piece.kind(), score = self.score, "spawn blocked, game over");
            return false;
        }

        debug!(kind = ?piece.kind(), next = ?self.next.kind(), "spawned piece");
        true
    }

    /// Move the current piece by `(dx, dy)` if the target is free
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        if self.board.is_valid_position(piece, dx, dy) {
            piece.translate(dx, dy);
            return true;
        }
        false
    }

    /// Rotate clockwise, trying each kick offset in order.
    ///
    /// When no offset fits the rotation is rejected and the piece keeps its
    /// previous shape and position.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        let original = *piece.shape();
        piece.rotate_clockwise();

        for &(dx, dy) in ROTATION_KICKS.iter() {
            if self.board.is_valid_position(piece, dx, dy) {
                piece.translate(dx, dy);
                return true;
            }
        }

        piece.set_shape(original);
        false
    }

    /// Move down one row, scoring the soft drop bonus on success
    pub fn soft_drop(&mut self) -> bool {
        if self.move_piece(0, 1) {
            self.score = self.score.saturating_add(self.config.soft_drop_bonus);
            return true;
        }
        false
    }

    /// Drop the current piece as far as it goes, score it and lock it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over || self.current.is_none() {
            return 0;
        }

        let mut distance = 0;
        while self.move_piece(0, 1) {
            distance += 1;
        }

        self.score = self
            .score
            .saturating_add(hard_drop_score(&self.config, distance));
        self.lock_piece();
        distance
    }

    /// Commit the current piece to the board and handle line clears.
    pub fn lock_piece(&mut self) -> LockOutcome {
        if self.game_over {
            return LockOutcome::ToppedOut;
        }
        let Some(piece) = self.current.take() else {
            return LockOutcome::NothingLocked;
        };

        self.board.lock(&piece);
        debug!(kind = ?piece.kind(), x = piece.x(), y = piece.y(), "locked piece");

        let lines = self.clear_lines();
        if lines > 0 {
            return LockOutcome::Clearing { lines };
        }

        if self.spawn_new_piece() {
            LockOutcome::Spawned
        } else {
            LockOutcome::ToppedOut
        }
    }

    /// Detect full rows, start the animation and update score and level.
    fn clear_lines(&mut self) -> usize {
        let rows = self.board.find_full_rows();
        if rows.is_empty() {
            return 0;
        }

        let count = rows.len();
        self.clearing_rows = rows;
        self.clear_timer_ms = 0;

        self.lines = self.lines.saturating_add(count as u32);
        let points = line_clear_score(&self.config, count, self.level);
        self.score = self.score.saturating_add(points);
        info!(lines = count, points, total_lines = self.lines, "lines cleared");

        let new_level = level_for_lines(&self.config, self.lines);
        if new_level > self.level {
            self.level = new_level;
            self.fall_interval_ms = fall_interval_ms(&self.config, new_level);
            info!(
                level = new_level,
                fall_interval_ms = self.fall_interval_ms,
                "level up"
            );
        }

        count
    }

    /// Remove the rows recorded at lock time and spawn the next piece.
    ///
    /// Returns false if the spawn was blocked.
    pub fn finish_clearing_animation(&mut self) -> bool {
        if self.clearing_rows.is_empty() {
            return !self.game_over;
        }
        let rows = std::mem::take(&mut self.clearing_rows);
        self.board.remove_rows(&rows);
        self.clear_timer_ms = 0;
        self.spawn_new_piece()
    }

    /// Stash the current piece, or swap it with the stashed one.
    ///
    /// Allowed once per piece; the permission comes back on the next spawn.
    pub fn hold_current_piece(&mut self) -> bool {
        if self.game_over || !self.can_hold {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        match self.hold.replace(piece.kind()) {
            None => {
                debug!(held = ?piece.kind(), "hold stored");
                self.spawn_new_piece();
            }
            Some(held) => {
                debug!(held = ?piece.kind(), current = ?held, "hold swapped");
                let swapped = Piece::spawn(held, self.config.grid_width);
                self.current = Some(swapped);
                if !self.board.is_valid_position(&swapped, 0, 0) {
                    self.game_over = true;
                    info!(kind = ?held, "held piece blocked at spawn, game over");
                }
            }
        }

        self.can_hold = false;
        true
    }

    /// Where the current piece would land. Never touches engine state.
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut ghost = self.current?;
        while self.board.is_valid_position(&ghost, 0, 1) {
            ghost.translate(0, 1);
        }
        Some(ghost)
    }

    /// Accumulate gravity time; on reaching the fall interval move the piece
    /// down, locking it if it cannot move.
    pub fn advance_gravity(&mut self, elapsed_ms: u32) -> GravityOutcome {
        if self.game_over || self.current.is_none() {
            return GravityOutcome::Waiting;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return GravityOutcome::Waiting;
        }

        self.fall_timer_ms = 0;
        if self.move_piece(0, 1) {
            GravityOutcome::Fell
        } else {
            GravityOutcome::Locked(self.lock_piece())
        }
    }

    /// Advance the clear animation. Returns true once it has elapsed (the
    /// caller then finishes it).
    pub fn advance_clear_animation(&mut self, elapsed_ms: u32) -> bool {
        if self.clearing_rows.is_empty() {
            return false;
        }
        self.clear_timer_ms = self.clear_timer_ms.saturating_add(elapsed_ms);
        self.clear_timer_ms >= self.config.clear_animation_ms
    }

    /// Start over: empty grid, fresh counters, new pieces from the same source
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = None;
        self.next = Piece::spawn(self.source.draw(), self.config.grid_width);
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = self.config.initial_fall_ms;
        self.fall_timer_ms = 0;
        self.clearing_rows.clear();
        self.clear_timer_ms = 0;
        self.game_over = false;
        info!("game reset");
        self.spawn_new_piece();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(pattern: &[PieceKind]) -> Engine {
        Engine::with_source(GameConfig::default(), PieceSource::cycle(pattern.to_vec())).unwrap()
    }

    /// Slide the current piece to column `x`, then down until blocked, then lock.
    fn place_at(engine: &mut Engine, x: i32) -> LockOutcome {
        let dx = x - engine.current().unwrap().x();
        let step = dx.signum();
        for _ in 0..dx.abs() {
            assert!(engine.move_piece(step, 0));
        }
        while engine.move_piece(0, 1) {}
        engine.lock_piece()
    }

    #[test]
    fn test_new_engine() {
        let engine = engine_with(&[PieceKind::T]);

        assert!(!engine.game_over());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.fall_interval_ms(), 1000);
        assert!(engine.can_hold());
        assert!(engine.hold_piece().is_none());
        assert_eq!(engine.current().unwrap().position(), (4, 0));
        assert_eq!(engine.next().kind(), PieceKind::T);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            grid_width: 1,
            ..GameConfig::default()
        };
        assert!(Engine::with_config(config, 1).is_err());
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut engine = engine_with(&[PieceKind::I, PieceKind::O, PieceKind::T]);
        assert_eq!(engine.current().unwrap().kind(), PieceKind::I);
        assert_eq!(engine.next().kind(), PieceKind::O);

        engine.hard_drop();
        assert_eq!(engine.current().unwrap().kind(), PieceKind::O);
        assert_eq!(engine.next().kind(), PieceKind::T);
    }

    #[test]
    fn test_move_piece_rejected_leaves_state() {
        let mut engine = engine_with(&[PieceKind::O]);
        for _ in 0..4 {
            assert!(engine.move_piece(-1, 0));
        }
        let before = *engine.current().unwrap();
        assert!(!engine.move_piece(-1, 0));
        assert_eq!(*engine.current().unwrap(), before);
    }

    #[test]
    fn test_rotate_refused_against_wall() {
        let mut engine = engine_with(&[PieceKind::I]);
        // Upright I against the right wall.
        assert!(engine.rotate_piece());
        while engine.move_piece(1, 0) {}
        assert_eq!(engine.current().unwrap().x(), 9);

        // Back to horizontal needs 4 columns; (-1, 0) is not enough at x=9,
        // and no kick reaches x=6, so the rotation is refused.
        let before = *engine.current().unwrap();
        assert!(!engine.rotate_piece());
        assert_eq!(*engine.current().unwrap(), before);
    }

    #[test]
    fn test_rotate_kicks_left_off_wall() {
        let mut engine = engine_with(&[PieceKind::T]);
        // T pointing right (2 wide) pressed against the right wall.
        assert!(engine.rotate_piece());
        while engine.move_piece(1, 0) {}
        let x = engine.current().unwrap().x();
        assert_eq!(x, 8);

        // Next rotation is 3 wide: (0,0) overflows, (-1,0) fits.
        assert!(engine.rotate_piece());
        assert_eq!(engine.current().unwrap().x(), 7);
    }

    #[test]
    fn test_rotate_rejected_restores_shape() {
        let mut engine = engine_with(&[PieceKind::I]);
        // A solid row just under the spawn leaves no room for an upright I.
        engine.board_mut().fill_row(1, PieceKind::Z);
        let before = *engine.current().unwrap();
        assert!(!engine.rotate_piece());
        assert_eq!(*engine.current().unwrap(), before);
    }

    #[test]
    fn test_soft_drop_scores() {
        let mut engine = engine_with(&[PieceKind::T]);
        assert!(engine.soft_drop());
        assert!(engine.soft_drop());
        assert_eq!(engine.score(), 2);
        assert_eq!(engine.current().unwrap().y(), 2);
    }

    #[test]
    fn test_hard_drop_scores_distance() {
        let mut engine = engine_with(&[PieceKind::O]);
        let distance = engine.hard_drop();
        assert_eq!(distance, 18);
        assert_eq!(engine.score(), 36);
        assert!(engine.board().is_occupied(4, 19));
        assert!(engine.board().is_occupied(5, 18));
    }

    #[test]
    fn test_four_o_pieces_clear_bottom_row() {
        let mut engine = engine_with(&[PieceKind::O]);
        // Pre-fill the two rightmost cells of the bottom row only.
        engine.board_mut().set(8, 19, Some(PieceKind::L));
        engine.board_mut().set(9, 19, Some(PieceKind::L));

        for x in [0, 2, 4] {
            assert_eq!(place_at(&mut engine, x), LockOutcome::Spawned);
        }
        let score_before = engine.score();
        let outcome = place_at(&mut engine, 6);

        assert_eq!(outcome, LockOutcome::Clearing { lines: 1 });
        assert_eq!(engine.clearing_rows(), &[19]);
        assert_eq!(engine.score() - score_before, 100);
        assert_eq!(engine.lines(), 1);
        assert_eq!(engine.level(), 1);
        // Spawn waits for the animation.
        assert!(engine.current().is_none());

        assert!(engine.finish_clearing_animation());
        assert!(engine.clearing_rows().is_empty());
        assert!(engine.current().is_some());
        // Upper half of the O stack fell into the bottom row.
        for x in 0..8 {
            assert!(engine.board().is_occupied(x, 19));
        }
        assert!(!engine.board().is_occupied(8, 19));
        assert_eq!(engine.board().filled_count(), 8);
    }

    #[test]
    fn test_level_up_speeds_gravity() {
        let mut engine = engine_with(&[PieceKind::I]);
        engine.lines = 9;
        // Bottom row complete except where a horizontal I lands.
        for x in 0..10 {
            if !(3..=6).contains(&x) {
                engine.board_mut().set(x, 19, Some(PieceKind::J));
            }
        }
        assert_eq!(engine.lock_piece_after_drop(), LockOutcome::Clearing { lines: 1 });
        assert_eq!(engine.lines(), 10);
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.fall_interval_ms(), 900);
        // Scored at the level in force when the line cleared.
        assert_eq!(engine.score(), 100);
    }

    #[test]
    fn test_spawn_into_occupied_cell_ends_game() {
        let mut engine = engine_with(&[PieceKind::O]);
        // Block where the next O will appear.
        engine.board_mut().set(4, 0, Some(PieceKind::Z));
        engine.current = Some(Piece::new(PieceKind::O, 0, 10));

        assert_eq!(engine.lock_piece(), LockOutcome::ToppedOut);
        assert!(engine.game_over());

        let board = engine.board().clone();
        assert!(!engine.move_piece(1, 0));
        assert!(!engine.move_piece(0, 1));
        assert!(!engine.rotate_piece());
        assert!(!engine.hold_current_piece());
        assert_eq!(engine.hard_drop(), 0);
        assert_eq!(engine.board(), &board);
    }

    #[test]
    fn test_hold_once_per_piece() {
        let mut engine = engine_with(&[PieceKind::T, PieceKind::I, PieceKind::S]);
        assert!(engine.hold_current_piece());
        assert_eq!(engine.hold_piece(), Some(PieceKind::T));
        assert_eq!(engine.current().unwrap().kind(), PieceKind::I);
        assert!(!engine.can_hold());

        // Second hold in the same piece life is a no-op.
        assert!(!engine.hold_current_piece());
        assert_eq!(engine.hold_piece(), Some(PieceKind::T));
        assert_eq!(engine.current().unwrap().kind(), PieceKind::I);

        // After a spawn holding works again and swaps.
        engine.hard_drop();
        assert!(engine.can_hold());
        assert_eq!(engine.current().unwrap().kind(), PieceKind::S);
        assert!(engine.hold_current_piece());
        assert_eq!(engine.hold_piece(), Some(PieceKind::S));
        assert_eq!(engine.current().unwrap().kind(), PieceKind::T);
    }

    #[test]
    fn test_hold_swap_resets_orientation() {
        let mut engine = engine_with(&[PieceKind::T, PieceKind::L]);
        engine.hold_current_piece();
        engine.hard_drop();

        // Current is T again (cycle); rotate and move it, then swap with held T.
        engine.rotate_piece();
        engine.move_piece(-2, 0);
        engine.soft_drop();
        assert!(engine.hold_current_piece());

        let swapped = engine.current().unwrap();
        assert_eq!(swapped.kind(), PieceKind::T);
        assert_eq!(*swapped, Piece::spawn(PieceKind::T, 10));
    }

    #[test]
    fn test_ghost_does_not_mutate() {
        let mut engine = engine_with(&[PieceKind::L]);
        engine.rotate_piece();
        let before = *engine.current().unwrap();

        let ghost = engine.ghost_piece().unwrap();

        assert_eq!(*engine.current().unwrap(), before);
        assert_eq!(ghost.kind(), before.kind());
        assert_eq!(ghost.shape(), before.shape());
        assert_eq!(ghost.x(), before.x());
        assert!(!engine.board().is_valid_position(&ghost, 0, 1));
        assert!(engine.board().is_valid_position(&ghost, 0, 0));
    }

    #[test]
    fn test_gravity_accumulates_then_falls() {
        let mut engine = engine_with(&[PieceKind::T]);
        assert_eq!(engine.advance_gravity(600), GravityOutcome::Waiting);
        assert_eq!(engine.current().unwrap().y(), 0);
        assert_eq!(engine.advance_gravity(400), GravityOutcome::Fell);
        assert_eq!(engine.current().unwrap().y(), 1);
        assert_eq!(engine.fall_timer_ms(), 0);
    }

    #[test]
    fn test_gravity_locks_when_blocked() {
        let mut engine = engine_with(&[PieceKind::T]);
        while engine.move_piece(0, 1) {}
        assert_eq!(
            engine.advance_gravity(1000),
            GravityOutcome::Locked(LockOutcome::Spawned)
        );
        assert_eq!(engine.board().filled_count(), 4);
    }

    #[test]
    fn test_clear_animation_progress() {
        let mut engine = engine_with(&[PieceKind::I]);
        for x in 0..10 {
            if !(3..=6).contains(&x) {
                engine.board_mut().set(x, 19, Some(PieceKind::J));
            }
        }
        engine.lock_piece_after_drop();

        assert_eq!(engine.clear_progress(), 0.0);
        assert!(!engine.advance_clear_animation(250));
        assert!((engine.clear_progress() - 0.5).abs() < f32::EPSILON);
        assert!(engine.advance_clear_animation(250));
        assert_eq!(engine.clear_progress(), 1.0);

        assert!(engine.finish_clearing_animation());
        assert_eq!(engine.clear_progress(), 0.0);
        assert_eq!(engine.board().filled_count(), 0);
    }

    #[test]
    fn test_reset_restores_initial_counters() {
        let mut engine = engine_with(&[PieceKind::O]);
        engine.hard_drop();
        engine.hold_current_piece();
        engine.level = 4;
        engine.fall_interval_ms = 700;

        engine.reset();

        assert_eq!(engine.score(), 0);
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.fall_interval_ms(), 1000);
        assert!(engine.hold_piece().is_none());
        assert!(engine.can_hold());
        assert_eq!(engine.board().filled_count(), 0);
        assert!(!engine.game_over());
        assert!(engine.current().is_some());
    }

    #[test]
    fn test_lock_keeps_partial_fall_time() {
        let mut engine = engine_with(&[PieceKind::O]);
        assert_eq!(engine.advance_gravity(900), GravityOutcome::Waiting);
        engine.hard_drop();
        assert_eq!(engine.fall_timer_ms(), 900);

        // The next piece only waits for the rest of the interval.
        assert_eq!(engine.advance_gravity(100), GravityOutcome::Fell);
        assert_eq!(engine.current().unwrap().y(), 1);
    }

    #[test]
    fn test_lock_without_piece_locks_nothing() {
        let mut engine = engine_with(&[PieceKind::I]);
        for x in 0..10 {
            if !(3..=6).contains(&x) {
                engine.board_mut().set(x, 19, Some(PieceKind::J));
            }
        }
        engine.lock_piece_after_drop();
        assert!(engine.current().is_none());

        let board = engine.board().clone();
        assert_eq!(engine.lock_piece(), LockOutcome::NothingLocked);
        assert_eq!(engine.board(), &board);
        assert_eq!(engine.lines(), 1);
    }

    #[test]
    fn test_hold_swap_into_blocked_spawn_ends_game() {
        let mut engine = engine_with(&[PieceKind::T, PieceKind::I, PieceKind::O]);
        assert!(engine.hold_current_piece());
        engine.hard_drop();
        assert_eq!(engine.current().unwrap().kind(), PieceKind::O);

        // Only the held T's spawn cells include (6, 1).
        engine.board_mut().set(6, 1, Some(PieceKind::Z));
        assert!(engine.hold_current_piece());

        assert!(engine.game_over());
        assert_eq!(engine.hold_piece(), Some(PieceKind::O));
        assert_eq!(engine.current().unwrap().kind(), PieceKind::T);
        assert!(!engine.move_piece(0, 1));
    }

    impl Engine {
        /// Hard drop without the drop bonus.
        fn lock_piece_after_drop(&mut self) -> LockOutcome {
            while self.move_piece(0, 1) {}
            self.lock_piece()
        }
    }
}
