//! Read-only view of a game for renderers and traces.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Coord, PieceKind};

/// One settled block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettledCell {
    pub x: i16,
    pub y: i16,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: i16,
    pub height: i16,
    /// Settled blocks sorted by row, then column.
    pub settled: Vec<SettledCell>,
    /// None once the game is over.
    pub falling_kind: Option<PieceKind>,
    /// Empty once the game is over.
    pub falling_piece_cells: Vec<Coord>,
    pub next_piece_kind: PieceKind,
    pub score: u32,
    pub level: u32,
    pub fall_delay_ms: i32,
    pub game_over: bool,
    pub paused: bool,
}

impl Snapshot {
    /// Coordinates of every settled block
    pub fn occupied_cells(&self) -> BTreeSet<Coord> {
        self.settled.iter().map(|c| (c.x, c.y)).collect()
    }

    /// Kind of the settled block at (x, y)
    pub fn settled_at(&self, x: i16, y: i16) -> Option<PieceKind> {
        self.settled
            .binary_search_by(|c| (c.y, c.x).cmp(&(y, x)))
            .ok()
            .map(|i| self.settled[i].kind)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
