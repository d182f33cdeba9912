//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state. It has **no dependency**
//! on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical shape sequences
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Can run in any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shape`]: The seven catalog shapes and clockwise rotation
//! - [`grid`]: Occupancy grid with collision detection and line clearing
//! - [`engine`]: Active piece, gravity, intents, locking, spawning, score
//! - [`rng`]: Uniform shape selection (seeded LCG) and scripted sources
//! - [`config`]: Grid size, fall interval and seed, with environment overrides
//! - [`snapshot`]: Read-only state view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Every spawn draws any of the 7 shapes with equal odds
//! - **Simple rotation**: Clockwise only, in place, no wall kicks
//! - **Immediate lock**: A piece locks as soon as a one-row downward move is blocked
//! - **Scoring**: One point per cleared row
//! - **Game over**: A newly spawned piece collides
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::{EngineConfig, GameEngine};
//! use mini_tetris_types::{Intent, RunState};
//!
//! let mut game = GameEngine::new(EngineConfig::default().with_seed(12345));
//!
//! game.handle_intent(Intent::MoveRight);
//! game.handle_intent(Intent::Rotate);
//! game.tick(500); // one gravity step
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.state, RunState::Running);
//! assert_eq!(snap.active.y, 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`](engine::GameEngine::tick) every frame with the
//! elapsed milliseconds. Gravity fires once the accumulated time reaches the
//! configured fall interval (500ms by default).

pub mod config;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use mini_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig, MAX_GRID_SIDE};
pub use engine::{ActivePiece, GameEngine, MoveResult};
pub use grid::Grid;
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use shape::{Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, Snapshot};
