//! Terminal rendering for the classic Tetris engine.
//!
//! [`GameView`] turns a core [`core::Snapshot`] into a [`FrameBuffer`] without
//! any I/O; [`TerminalRenderer`] flushes frames to the terminal through
//! crossterm, writing only what changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
