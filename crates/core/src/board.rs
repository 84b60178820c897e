//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or filled
//! with a piece kind. Storage is a flat vector (row-major, `y * width + x`)
//! allocated once; the dimensions never change afterwards.
//!
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the grid (y < 0) are treated as open space by collision tests
//! so pieces can spawn partially out of view.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Whether `piece`, shifted by `(dx, dy)`, fits on the board.
    ///
    /// A cell fails if its column is outside `[0, width)`, its row is at or
    /// below `height`, or its row is on the grid and already occupied. Rows
    /// above the grid are allowed.
    pub fn is_valid_position(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.occupied_cells().all(|(x, y)| {
            let (x, y) = (x + dx, y + dy);
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return false;
            }
            y < 0 || !self.is_occupied(x, y)
        })
    }

    /// Copy a piece's cells into the grid.
    ///
    /// Cells above the grid are dropped; the next spawn failing is what ends
    /// the game, not this lock.
    pub fn lock(&mut self, piece: &Piece) {
        let kind = piece.kind();
        for (x, y) in piece.occupied_cells() {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Indices of completely filled rows, top to bottom
    pub fn find_full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the given rows and shift everything above them down.
    ///
    /// The input may be in any order; duplicates and out-of-range indices are
    /// ignored. Rows are processed bottom to top so earlier removals never
    /// shift an index still waiting to be removed, and one fresh empty row is
    /// inserted at the top for each row removed. Returns the number removed.
    pub fn remove_rows(&mut self, rows: &[usize]) -> usize {
        let height = self.height as usize;
        let width = self.width as usize;

        let mut doomed = vec![false; height];
        for &y in rows {
            if y < height {
                doomed[y] = true;
            }
        }

        // Compact surviving rows toward the bottom, highest index first.
        let mut write_y = height;
        for read_y in (0..height).rev() {
            if doomed[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        // Everything above the compacted block is fresh.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        write_y
    }

    /// Count of occupied cells (handy for tests and debug logging)
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill an entire row with `kind` (test and scenario setup helper)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y < self.height as usize {
            let start = y * self.width as usize;
            self.cells[start..start + self.width as usize].fill(Some(kind));
        }
    }
}
