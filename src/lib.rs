//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `classic_tetris::{core,input,term,types}`
//! and hosts the driver-side pieces of the terminal binary: run configuration
//! and the landing trace.

pub mod config;
pub mod trace;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
