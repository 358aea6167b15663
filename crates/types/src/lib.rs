//! Core types module - shared data structures and constants
//!
//! Pure data types used by the engine, the input layer and the renderer.
//! Nothing in here knows about terminals, keys or timers.
//!
//! # Board Dimensions
//!
//! The classic ruleset plays on a 10 x 20 field:
//!
//! - **Width**: 10 columns (x = 0..9, left to right)
//! - **Height**: 20 rows (y = 0..19, top to bottom)
//! - **Spawn center**: `(width / 2, 0)`
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_DELAY_MS` | 1000 | Delay between gravity ticks at level 1 |
//! | `LEVEL_UP_DELAY_STEP_MS` | 120 | Delay reduction per level gained |
//! | `PLACEMENT_BONUS_PER_LEVEL` | 5 | Points per landed piece, times level |
//! | `LINE_SCORE_BASE` | 10 | Base factor of the row-clear formula |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("s").unwrap();
//! assert_eq!(kind, PieceKind::S);
//! assert_eq!(kind.color_name(), "green");
//!
//! assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i16 = 20;

/// Gravity interval at the start of a game
pub const INITIAL_FALL_DELAY_MS: i32 = 1000;

/// Fall delay reduction applied on every level-up (no floor)
pub const LEVEL_UP_DELAY_STEP_MS: i32 = 120;

/// Every landed piece scores `PLACEMENT_BONUS_PER_LEVEL * level`
pub const PLACEMENT_BONUS_PER_LEVEL: u32 = 5;

/// Row clears score `LINE_SCORE_BASE * mult * level * mult`
pub const LINE_SCORE_BASE: u32 = 10;

/// Flat bonus of the unreachable multi-row branch
pub const MULTI_CLEAR_BONUS_PER_LEVEL: u32 = 1000;

/// Cumulative score at which each level after the first begins.
///
/// Index 0 is the threshold for level 2, the last entry for the top level.
pub const LEVEL_THRESHOLDS: [u32; 5] = [1000, 2000, 4000, 8000, 16000];

/// Board coordinate `(x, y)`, y grows downward.
pub type Coord = (i16, i16);

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in factory order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Canonical display color. Cosmetic only.
    pub fn color_name(&self) -> &'static str {
        match self {
            PieceKind::I => "blue",
            PieceKind::J => "orange",
            PieceKind::L => "cyan",
            PieceKind::O => "red",
            PieceKind::S => "green",
            PieceKind::T => "yellow",
            PieceKind::Z => "magenta",
        }
    }
}

/// Logical commands delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Left,
    Right,
    Down,
    Drop,
    Rotate,
    TogglePause,
}

impl Command {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "down" => Some(Command::Down),
            "drop" => Some(Command::Drop),
            "rotate" => Some(Command::Rotate),
            "togglepause" | "pause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Drop => "drop",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
        }
    }
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickOutcome {
    /// The piece fell one row, or the tick was a paused no-op.
    Continued,
    /// The piece settled and the next one spawned.
    Landed,
    /// The game is over (either already, or the next spawn was blocked).
    GameOver,
}

/// Why a command had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoredReason {
    Paused,
    GameOver,
}

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandOutcome {
    Moved,
    Blocked,
    Landed,
    /// The pause flag flipped.
    Toggled,
    Ignored(IgnoredReason),
}

impl CommandOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, CommandOutcome::Ignored(_))
    }
}
