//! Board module - occupancy grid of settled blocks
//!
//! The grid is sparse: a coordinate is present iff a settled block occupies it.
//! Cells are only added by [`Board::settle`], removed by [`Board::clear_row`]
//! and re-keyed by [`Board::shift_rows_down`].
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)

use std::collections::HashMap;

use crate::piece::Piece;
use crate::types::{Coord, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The play field and its settled blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i16,
    height: i16,
    /// Occupied coordinate -> kind of the piece that left the block there.
    grid: HashMap<Coord, PieceKind>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i16, height: i16) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            grid: HashMap::new(),
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.width || y < 0 || y >= self.height
    }

    /// Check if a block may be placed at (x, y): in bounds and empty
    pub fn can_place(&self, x: i16, y: i16) -> bool {
        !self.is_out_of_bounds(x, y) && !self.grid.contains_key(&(x, y))
    }

    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        self.grid.contains_key(&(x, y))
    }

    /// Kind of the settled block at (x, y), if any
    pub fn get(&self, x: i16, y: i16) -> Option<PieceKind> {
        self.grid.get(&(x, y)).copied()
    }

    /// Number of settled blocks
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Iterate settled blocks in no particular order
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceKind)> + '_ {
        self.grid.iter().map(|(&coord, &kind)| (coord, kind))
    }

    /// Commit a landed piece into the grid.
    ///
    /// The caller must already know the piece cannot fall any further;
    /// settling a piece that still has a downward move, or one overlapping
    /// the grid, is a caller bug and panics.
    pub fn settle(&mut self, piece: &Piece) {
        assert!(
            !piece.can_translate(self, 0, 1),
            "settle called for a {:?} piece that can still fall",
            piece.kind()
        );
        for (x, y) in piece.offsets() {
            assert!(
                self.can_place(x, y),
                "settle would overwrite or escape the board at ({}, {})",
                x,
                y
            );
        }

        for coord in piece.offsets() {
            self.grid.insert(coord, piece.kind());
        }
    }

    /// Check if every column of row `y` is occupied
    pub fn is_row_complete(&self, y: i16) -> bool {
        (0..self.width).all(|x| self.grid.contains_key(&(x, y)))
    }

    /// Number of rows that are currently complete
    pub fn count_completed_rows(&self) -> usize {
        (0..self.height).filter(|&y| self.is_row_complete(y)).count()
    }

    /// Remove every block in row `y`. Panics if the row is not complete.
    pub fn clear_row(&mut self, y: i16) {
        assert!(self.is_row_complete(y), "clear_row called for incomplete row {}", y);
        for x in 0..self.width {
            self.grid.remove(&(x, y));
        }
    }

    /// Move every block in rows `from_y - 1` up to `0` down by one row.
    ///
    /// Rows are processed from `from_y - 1` toward 0 so a block is never
    /// shifted twice in one pass. Row `from_y` must be empty.
    pub fn shift_rows_down(&mut self, from_y: i16) {
        for y in (0..from_y).rev() {
            for x in 0..self.width {
                if let Some(kind) = self.grid.remove(&(x, y)) {
                    self.grid.insert((x, y + 1), kind);
                }
            }
        }
    }

    /// Clear all complete rows in one top-to-bottom pass and return how many were cleared.
    ///
    /// Each complete row is cleared and everything above it shifted down before
    /// the scan continues. A row is never re-examined after content shifts into it.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.is_row_complete(y) {
                self.clear_row(y);
                self.shift_rows_down(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Remove every settled block
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Place a block directly, bypassing piece rules (for tests and scenario setup)
    ///
    /// Returns false if (x, y) is out of bounds.
    pub fn fill(&mut self, x: i16, y: i16, kind: PieceKind) -> bool {
        if self.is_out_of_bounds(x, y) {
            return false;
        }
        self.grid.insert((x, y), kind);
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
