//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`types::Intent`]s. Only key presses
//! count: every press is one discrete intent, with no auto-repeat of its own.

pub mod map;

pub use mini_tetris_types as types;

pub use map::{handle_key_event, should_quit};
