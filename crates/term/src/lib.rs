//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the snapshot-to-framebuffer step pure so it can be unit tested
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use fb::{rgb, Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
