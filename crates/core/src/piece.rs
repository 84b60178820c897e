//! Piece module - tetromino shape matrices and rotation
//!
//! Every piece is a small rectangular binary matrix (at most 4x4) anchored by
//! its top-left corner. Rotation replaces the whole matrix and never moves the
//! anchor; whether the rotated piece fits is the caller's business.
//!
//! Spawn shapes:
//!
//! ```text
//! I  ####      O  ##     T  .#.    S  .##
//!                 ##        ###       ##.
//!
//! Z  ##.       J  #..    L  ..#
//!    .##          ###       ###
//! ```

use crate::types::PieceKind;

/// Largest side of any shape matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// Spawn matrices indexed by [`PieceKind::index`], as `(rows, cols, bits)`.
///
/// Each entry of `bits` is one row; bit `c` set means column `c` is filled.
const SPAWN_SHAPES: [(u8, u8, [u8; MAX_SHAPE_DIM]); 7] = [
    (1, 4, [0b1111, 0, 0, 0]), // I
    (2, 2, [0b11, 0b11, 0, 0]),  // O
    (2, 3, [0b010, 0b111, 0, 0]), // T
    (2, 3, [0b110, 0b011, 0, 0]), // S
    (2, 3, [0b011, 0b110, 0, 0]), // Z
    (2, 3, [0b001, 0b111, 0, 0]), // J
    (2, 3, [0b100, 0b111, 0, 0]), // L
];

/// Rectangular binary matrix describing which cells of a piece are filled.
///
/// Cells outside `rows x cols` are always empty, so two shapes compare equal
/// exactly when they have the same dimensions and the same filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Spawn orientation for a kind.
    pub fn spawn(kind: PieceKind) -> Self {
        let (rows, cols, bits) = SPAWN_SHAPES[kind.index()];
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..rows as usize {
            for c in 0..cols as usize {
                cells[r][c] = bits[r] & (1 << c) != 0;
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a shape from row slices. Returns `None` for an empty, ragged or
    /// oversized matrix.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            cells[r][..width].copy_from_slice(row);
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether `(row, col)` is filled. Out-of-range positions are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Filled cells as `(col, row)` offsets from the top-left anchor.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c, r))
        })
    }

    /// Clockwise rotation: reverse the row order, then transpose.
    pub fn rotated_clockwise(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Counterclockwise rotation: transpose, then reverse the row order.
    pub fn rotated_counterclockwise(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[c][cols - 1 - r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// A tetromino instance: immutable kind, mutable shape and position.
///
/// `Piece` is `Copy`, so cloning (for the ghost projection or a rotation
/// trial) never shares state with the live piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Create a piece at `(x, y)` in spawn orientation.
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: Shape::spawn(kind),
            x,
            y,
        }
    }

    /// Create a piece at the spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        let shape = Shape::spawn(kind);
        let x = board_width as i32 / 2 - shape.cols() as i32 / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Replace the whole shape matrix (used to undo a rejected rotation).
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotate_clockwise(&mut self) {
        self.shape = self.shape.rotated_clockwise();
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.shape = self.shape.rotated_counterclockwise();
    }

    /// Absolute board coordinates `(x, y)` of every filled cell.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(c, r)| (self.x + c as i32, self.y + r as i32))
    }
}
