//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the classic Tetris rules and the game state machine.
//! It has **no dependencies** on terminals, timers or input devices:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Driver-agnostic**: an external loop calls [`Game::tick`] at the interval
//!   reported by [`Game::fall_delay_ms`] and forwards [`types::Command`]s
//! - **Headless**: renderers read a [`Snapshot`] and never mutate the game
//!
//! # Module Structure
//!
//! - [`board`]: sparse occupancy grid, placement checks, row clearing and gravity
//! - [`piece`]: the seven shapes and pivot rotation with direction memory
//! - [`factory`]: seeded uniform piece selection and spawn placement
//! - [`scoring`]: placement bonus, row-clear formula and level thresholds
//! - [`progression`]: cumulative score, level and the level-up edge detector
//! - [`game`]: the controller tying everything together
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Board**: 10 x 20 by default, pieces spawn centered at `(width / 2, 0)`
//! - **Randomizer**: each kind equally likely, independent draws
//! - **Rotation**: 90 degrees about a pivot block; I, S and Z alternate direction
//!   so they toggle between two orientations; O never rotates; no wall kicks
//! - **Scoring**: `5 * level` per landed piece, plus `10 * m * level * m` with
//!   `m = 2 * rows completed`
//! - **Levels**: 1 to 6 at 1000/2000/4000/8000/16000 points; every level-up
//!   shortens the fall delay by 120 ms
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{new_game, types::{Command, CommandOutcome, TickOutcome}};
//!
//! let mut game = new_game(10, 20);
//! assert_eq!(game.tick(), TickOutcome::Continued);
//!
//! game.command(Command::Left);
//! assert_eq!(game.command(Command::Drop), CommandOutcome::Landed);
//!
//! // Every landing scores the placement bonus.
//! assert_eq!(game.score(), 5);
//! assert_eq!(game.snapshot().occupied_cells().len(), 4);
//! ```

pub mod board;
pub mod factory;
pub mod game;
pub mod piece;
pub mod progression;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use factory::{spawn_position, PieceFactory, SimpleRng};
pub use game::{new_game, Game, GameConfig, LandingReport};
pub use piece::{shape_spec, Piece, ShapeSpec};
pub use progression::Progression;
pub use scoring::{level_for_score, line_clear_points, placement_points};
pub use snapshot::{SettledCell, Snapshot};
