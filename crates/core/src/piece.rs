//! Pieces module - tetromino shapes and pivot rotation
//!
//! Each kind is described by a static [`ShapeSpec`]: the four block offsets
//! around the spawn center, the index of the pivot block, and the rotation
//! direction bookkeeping. Rotation turns every block 90 degrees about the
//! pivot in integer grid space:
//!
//! ```text
//! x' = cx - r*cy + r*by
//! y' = cy + r*cx - r*bx
//! ```
//!
//! where `(cx, cy)` is the pivot, `(bx, by)` the block and `r` the current
//! rotation sign. I, S and Z flip `r` after every rotation so they toggle
//! between two orientations. O never rotates.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, PieceKind};

/// Block offsets relative to the spawn center
pub type ShapeOffsets = [Coord; 4];

/// Static description of a tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    pub offsets: ShapeOffsets,
    /// Index into `offsets` of the block rotation is computed about.
    pub pivot: usize,
    /// Rotation sign at spawn.
    pub initial_rotation_dir: i16,
    /// Whether the sign flips after each successful rotation.
    pub shifts_rotation_dir: bool,
}

const I_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    pivot: 2,
    initial_rotation_dir: 1,
    shifts_rotation_dir: true,
};

const J_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(-1, 0), (0, 0), (1, 0), (1, 1)],
    pivot: 1,
    initial_rotation_dir: 1,
    shifts_rotation_dir: false,
};

const L_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    pivot: 1,
    initial_rotation_dir: 1,
    shifts_rotation_dir: false,
};

const O_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(0, 0), (-1, 0), (0, 1), (-1, 1)],
    pivot: 0,
    initial_rotation_dir: 1,
    shifts_rotation_dir: false,
};

const S_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(0, 0), (0, 1), (1, 0), (-1, 1)],
    pivot: 0,
    initial_rotation_dir: -1,
    shifts_rotation_dir: true,
};

const T_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(-1, 0), (0, 0), (1, 0), (0, 1)],
    pivot: 1,
    initial_rotation_dir: 1,
    shifts_rotation_dir: false,
};

const Z_SPEC: ShapeSpec = ShapeSpec {
    offsets: [(-1, 0), (0, 0), (0, 1), (1, 1)],
    pivot: 1,
    initial_rotation_dir: -1,
    shifts_rotation_dir: true,
};

/// Get the shape description for a piece kind
pub fn shape_spec(kind: PieceKind) -> &'static ShapeSpec {
    match kind {
        PieceKind::I => &I_SPEC,
        PieceKind::J => &J_SPEC,
        PieceKind::L => &L_SPEC,
        PieceKind::O => &O_SPEC,
        PieceKind::S => &S_SPEC,
        PieceKind::T => &T_SPEC,
        PieceKind::Z => &Z_SPEC,
    }
}

/// A falling tetromino in absolute board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    blocks: [Coord; 4],
    rotation_dir: i16,
}

impl Piece {
    /// Create a piece whose shape is laid out around `center`
    pub fn new(kind: PieceKind, center: Coord) -> Self {
        let spec = shape_spec(kind);
        let (cx, cy) = center;
        Self {
            kind,
            blocks: spec.offsets.map(|(dx, dy)| (cx + dx, cy + dy)),
            rotation_dir: spec.initial_rotation_dir,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current absolute positions of the four blocks
    pub fn offsets(&self) -> [Coord; 4] {
        self.blocks
    }

    /// Current rotation sign (+1 or -1)
    pub fn rotation_dir(&self) -> i16 {
        self.rotation_dir
    }

    /// Position of the pivot block
    pub fn pivot(&self) -> Coord {
        self.blocks[shape_spec(self.kind).pivot]
    }

    /// Shift every block by (dx, dy). No validation.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        for (x, y) in self.blocks.iter_mut() {
            *x += dx;
            *y += dy;
        }
    }

    /// Check that every shifted block lands in bounds on a free cell
    ///
    /// Cells currently covered by this piece count as free.
    pub fn can_translate(&self, board: &Board, dx: i16, dy: i16) -> bool {
        self.blocks.iter().all(|&(x, y)| {
            let (nx, ny) = (x + dx, y + dy);
            board.can_place(nx, ny)
                || (!board.is_out_of_bounds(nx, ny) && self.blocks.contains(&(nx, ny)))
        })
    }

    /// Block positions after one rotation, without any validation
    fn rotated_blocks(&self) -> [Coord; 4] {
        let r = self.rotation_dir;
        let (cx, cy) = self.pivot();
        self.blocks
            .map(|(bx, by)| (cx - r * cy + r * by, cy + r * cx - r * bx))
    }

    /// Block positions after rotation, or None if any of them is not placeable
    pub fn rotation_preview(&self, board: &Board) -> Option<[Coord; 4]> {
        let mut out: ArrayVec<Coord, 4> = ArrayVec::new();
        for (x, y) in self.rotated_blocks() {
            if !board.can_place(x, y) {
                return None;
            }
            out.push((x, y));
        }
        out.into_inner().ok()
    }

    pub fn can_rotate(&self, board: &Board) -> bool {
        self.rotation_preview(board).is_some()
    }

    /// Apply the rotation; the caller validates with [`Piece::can_rotate`] first.
    ///
    /// Returns whether the blocks moved. The O piece never rotates.
    pub fn rotate(&mut self, board: &Board) -> bool {
        if self.kind == PieceKind::O {
            return false;
        }
        debug_assert!(self.can_rotate(board), "rotate called without a valid preview");

        self.blocks = self.rotated_blocks();
        if shape_spec(self.kind).shifts_rotation_dir {
            self.rotation_dir = -self.rotation_dir;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_layouts() {
        let t = Piece::new(PieceKind::T, (5, 0));
        assert_eq!(t.offsets(), [(4, 0), (5, 0), (6, 0), (5, 1)]);
        assert_eq!(t.pivot(), (5, 0));

        let i = Piece::new(PieceKind::I, (5, 0));
        assert_eq!(i.offsets(), [(3, 0), (4, 0), (5, 0), (6, 0)]);
        assert_eq!(i.pivot(), (5, 0));

        let s = Piece::new(PieceKind::S, (5, 0));
        assert_eq!(s.rotation_dir(), -1);
        assert_eq!(s.pivot(), (5, 0));
    }

    #[test]
    fn test_rotate_t_about_pivot() {
        let board = Board::default();
        let mut t = Piece::new(PieceKind::T, (5, 5));

        assert!(t.rotate(&board));
        // r = +1: (4,5) -> (5,6), (6,5) -> (5,4), (5,6) -> (6,5)
        assert_eq!(t.offsets(), [(5, 6), (5, 5), (5, 4), (6, 5)]);
        assert_eq!(t.rotation_dir(), 1);
    }

    #[test]
    fn test_rotated_blocks_ignores_board() {
        let t = Piece::new(PieceKind::T, (5, 0));
        // Top row would leave the board.
        assert!(t.rotated_blocks().iter().any(|&(_, y)| y < 0));
        assert_eq!(t.rotation_preview(&Board::default()), None);
    }
}
