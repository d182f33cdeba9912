//! Minimal terminal Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `mini_tetris::{core, input, term, types}`
//! so binaries, integration tests and benches share one import path.

pub use mini_tetris_core as core;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;
