//! Piece factory - picks the next tetromino kind and builds it at the spawn point
//!
//! Kinds are drawn uniformly among the seven shapes (no bag), using a small
//! LCG so a seed reproduces the same game. A scripted mode replays a fixed
//! cycle of kinds for tests and benchmarks.

use crate::piece::Piece;
use crate::types::{Coord, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    /// Only the high 16 bits are used; the low bits of this LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

#[derive(Debug, Clone)]
enum Source {
    Random(SimpleRng),
    Scripted { kinds: Vec<PieceKind>, index: usize },
}

/// Produces the kinds of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceFactory {
    source: Source,
}

impl PieceFactory {
    /// Uniformly random kinds from a seeded RNG
    pub fn seeded(seed: u32) -> Self {
        Self {
            source: Source::Random(SimpleRng::new(seed)),
        }
    }

    /// Repeat `kinds` in order, forever.
    ///
    /// Panics if `kinds` is empty.
    pub fn scripted(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "scripted factory needs at least one kind");
        Self {
            source: Source::Scripted {
                kinds: kinds.to_vec(),
                index: 0,
            },
        }
    }

    /// Pick the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            Source::Scripted { kinds, index } => {
                let kind = kinds[*index];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }

    /// Build a piece of `kind` centered on the spawn point of a board `width` wide
    pub fn create(kind: PieceKind, width: i16) -> Piece {
        Piece::new(kind, spawn_position(width))
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::seeded(1)
    }
}

/// Center new pieces are laid out around
pub fn spawn_position(width: i16) -> Coord {
    (width / 2, 0)
}
