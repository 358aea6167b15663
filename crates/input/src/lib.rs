//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the closed [`crate::types::Command`] set.
//! The engine never sees key names; restart and quit are driver concerns and
//! are reported separately.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{map_key_event, should_quit, should_restart};
