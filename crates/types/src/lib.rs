//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no runtime dependencies, so they can be used
//! by the engine, the terminal renderer and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! The default playfield is 16 columns by 16 rows (a 400px window split into
//! 25px cells). Both dimensions are configurable per engine instance.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_INTERVAL_MS` | 500 | Gravity step interval |
//! | `FRAME_MS` | 33 | Terminal loop frame interval (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use mini_tetris_types::{Intent, ShapeKind, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
//!
//! // Parse an intent (case-insensitive)
//! assert_eq!(Intent::from_str("rotate"), Some(Intent::Rotate));
//! assert_eq!(Intent::from_str("hardDrop"), None);
//!
//! // Catalog order
//! assert_eq!(ShapeKind::ALL[0], ShapeKind::I);
//!
//! // Grid dimensions
//! assert_eq!(DEFAULT_GRID_WIDTH, 16);
//! assert_eq!(DEFAULT_GRID_HEIGHT, 16);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default grid width in cells (16 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 16;

/// Default grid height in cells (16 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 16;

/// Default gravity interval (one row every 500ms)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 500;

/// Frame interval of the terminal loop (33ms ≈ 30 FPS)
pub const FRAME_MS: u32 = 33;

/// Largest row or column count of any shape
pub const MAX_SHAPE_SPAN: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DEFAULT_FALL_INTERVAL_MS, 500);
        assert_eq!(FRAME_MS, 33);
        assert!(FRAME_MS < DEFAULT_FALL_INTERVAL_MS);
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
        assert_eq!(Intent::from_str("MOVELEFT"), Some(Intent::MoveLeft));
        assert_eq!(Intent::from_str(""), None);
        assert_eq!(Intent::from_str("hold"), None);
    }

    #[test]
    fn shape_kind_catalog_has_seven_distinct_entries() {
        for (i, a) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            for b in &ShapeKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

/// The seven shape kinds, in catalog order
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **Z**: Z-shaped
/// - **S**: S-shaped (mirror of Z)
/// - **T**: T-shaped
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    I,
    O,
    Z,
    S,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Position in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::Z => 2,
            ShapeKind::S => 3,
            ShapeKind::T => 4,
            ShapeKind::L => 5,
            ShapeKind::J => 6,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mini_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Uppercase letter, as shown by the renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::Z => "Z",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// Discrete player intents accepted by the engine
///
/// Anything the input layer cannot map to one of these is dropped before it
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::SoftDrop,
        Intent::Rotate,
    ];

    /// Parse intent from string
    ///
    /// # Examples
    ///
    /// ```
    /// use mini_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("softdrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}

/// Session lifecycle
///
/// `Over` is terminal: once a freshly spawned piece collides, every mutating
/// engine call becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunState {
    #[default]
    Running,
    Over,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, RunState::Over)
    }
}
