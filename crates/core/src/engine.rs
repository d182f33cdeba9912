//! Engine module - owns the complete game state
//!
//! This module ties together the grid, the active piece, the shape source and
//! the score. It handles gravity timing, piece movement, rotation, locking,
//! line clears and the game-over transition.
//!
//! Every public mutating call runs to completion and leaves the engine in a
//! consistent state. Once the state is [`RunState::Over`] they all become
//! no-ops.

use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::rng::{ShapeSource, UniformShapes};
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{Intent, RunState, ShapeKind};

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    /// Current arrangement (the catalog shape, possibly rotated)
    pub shape: Shape,
    /// Grid column of the shape's left edge
    pub x: i32,
    /// Grid row of the shape's top edge
    pub y: i32,
}

impl ActivePiece {
    /// Catalog shape centred horizontally on the top row
    pub fn spawn(kind: ShapeKind, grid_width: u16) -> Self {
        let shape = Shape::of(kind);
        let x = (grid_width / 2) as i32 - (shape.width() / 2) as i32;
        Self { kind, shape, x, y: 0 }
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.shape, self.x, self.y)
    }
}

/// Outcome of [`GameEngine::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Anchor updated
    Moved,
    /// Rejected without any state change
    Blocked,
    /// Downward move blocked: the piece locked, `lines` rows cleared, and the
    /// next piece spawned (possibly ending the game)
    Locked { lines: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<S = UniformShapes> {
    config: EngineConfig,
    grid: Grid,
    active: ActivePiece,
    source: S,
    score: u32,
    state: RunState,
    fall_timer_ms: u32,
    pieces_locked: u32,
}

impl GameEngine<UniformShapes> {
    /// Create a new game with an empty grid and uniformly random shapes
    /// seeded from `config.seed`
    pub fn new(config: EngineConfig) -> Self {
        Self::with_source(config, UniformShapes::new(config.seed))
    }
}

impl Default for GameEngine<UniformShapes> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: ShapeSource> GameEngine<S> {
    /// Create a new game with an empty grid drawing shapes from `source`
    pub fn with_source(config: EngineConfig, source: S) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self::with_grid(config, grid, source)
    }

    /// Start from an existing grid; its dimensions replace the configured ones
    ///
    /// The first piece spawns immediately, so a grid whose top rows are
    /// already blocked starts (and stays) over.
    pub fn with_grid(config: EngineConfig, grid: Grid, mut source: S) -> Self {
        let config = config.with_size(grid.width(), grid.height());
        let active = ActivePiece::spawn(source.next_kind(), grid.width());
        let mut engine = Self {
            config,
            grid,
            active,
            source,
            score: 0,
            state: RunState::Running,
            fall_timer_ms: 0,
            pieces_locked: 0,
        };
        engine.check_spawn();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Time accumulated towards the next gravity step
    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Pieces locked into the grid this session
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Write the current state into `out`, reusing its cell buffer
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = ActiveSnapshot::from(&self.active);
        out.score = self.score;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            active: ActiveSnapshot::from(&self.active),
            score: self.score,
            state: self.state,
        }
    }

    /// Apply a player intent; returns whether anything changed
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.try_move(-1, 0) != MoveResult::Blocked,
            Intent::MoveRight => self.try_move(1, 0) != MoveResult::Blocked,
            Intent::SoftDrop => self.try_move(0, 1) != MoveResult::Blocked,
            Intent::Rotate => self.try_rotate(),
        }
    }

    /// Gravity: accumulate `elapsed_ms` and step down once the fall interval
    /// is reached
    ///
    /// The accumulator resets to zero on a step; any surplus is dropped, so a
    /// single call never moves the piece more than one row. Returns whether a
    /// gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.config.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.try_move(0, 1);
        true
    }

    /// Try to move the active piece by (dx, dy)
    ///
    /// Only a blocked move of exactly one row down lands the piece. Any other
    /// blocked move is ignored. Pieces are never moved upward by the engine.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveResult {
        if self.game_over() {
            return MoveResult::Blocked;
        }

        let x = self.active.x + dx;
        let y = self.active.y + dy;

        if self.grid.collides(&self.active.shape, x, y) {
            if dy == 1 {
                let lines = self.land();
                return MoveResult::Locked { lines };
            }
            return MoveResult::Blocked;
        }

        self.active.x = x;
        self.active.y = y;
        MoveResult::Moved
    }

    /// Rotate the active piece clockwise in place
    ///
    /// No wall kicks: if the rotated shape collides at the current anchor the
    /// rotation is rejected.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let rotated = self.active.shape.rotated_cw();
        if self.grid.collides(&rotated, self.active.x, self.active.y) {
            return false;
        }

        self.active.shape = rotated;
        true
    }

    /// Write the active piece's cells into the grid at its current position
    pub fn lock(&mut self) {
        if self.game_over() {
            return;
        }
        self.grid
            .lock(&self.active.shape, self.active.x, self.active.y);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
    }

    /// Remove full rows; returns how many were removed
    ///
    /// Does not touch the score.
    pub fn clear_lines(&mut self) -> u32 {
        if self.game_over() {
            return 0;
        }
        self.grid.clear_full_rows()
    }

    /// Replace the active piece with a fresh one from the shape source
    ///
    /// Returns false, and ends the game, when the new piece collides at its
    /// spawn position.
    pub fn spawn(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let kind = self.source.next_kind();
        self.active = ActivePiece::spawn(kind, self.grid.width());
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if self.active.collides(&self.grid) {
            self.state = RunState::Over;
            info!(
                score = self.score,
                pieces = self.pieces_locked,
                kind = self.active.kind.as_str(),
                "spawn blocked, game over"
            );
            return false;
        }

        trace!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            "spawned piece"
        );
        true
    }

    /// Lock, clear, score, spawn
    fn land(&mut self) -> u32 {
        self.lock();
        let lines = self.clear_lines();
        self.score = self.score.saturating_add(lines);
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            lines,
            score = self.score,
            "piece locked"
        );
        self.spawn();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedShapes;

    fn engine_with(kinds: &[ShapeKind], width: u16, height: u16) -> GameEngine<ScriptedShapes> {
        let config = EngineConfig::default().with_size(width, height);
        GameEngine::with_source(config, ScriptedShapes::new(kinds.to_vec()))
    }

    #[test]
    fn test_new_engine_state() {
        let engine = GameEngine::new(EngineConfig::default());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state(), RunState::Running);
        assert_eq!(engine.active().y, 0);
        assert_eq!(engine.grid().cells().iter().filter(|&&c| c).count(), 0);
    }

    #[test]
    fn test_spawn_position_is_centred() {
        // 16 / 2 - 4 / 2 = 6
        let engine = engine_with(&[ShapeKind::I], 16, 16);
        assert_eq!((engine.active().x, engine.active().y), (6, 0));

        // 16 / 2 - 3 / 2 = 7
        let engine = engine_with(&[ShapeKind::T], 16, 16);
        assert_eq!(engine.active().x, 7);

        // 7 / 2 - 2 / 2 = 2
        let engine = engine_with(&[ShapeKind::O], 7, 5);
        assert_eq!(engine.active().x, 2);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameEngine::new(EngineConfig::default().with_seed(99));
        let mut b = GameEngine::new(EngineConfig::default().with_seed(99));
        for _ in 0..20 {
            assert_eq!(a.active().kind, b.active().kind);
            a.spawn();
            b.spawn();
        }
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut engine = engine_with(&[ShapeKind::O], 10, 10);
        assert!(!engine.tick(200));
        assert!(!engine.tick(299));
        assert_eq!(engine.active().y, 0);
        assert_eq!(engine.fall_timer_ms(), 499);

        assert!(engine.tick(1));
        assert_eq!(engine.active().y, 1);
        assert_eq!(engine.fall_timer_ms(), 0);
    }

    #[test]
    fn test_tick_drops_at_most_one_row() {
        let mut engine = engine_with(&[ShapeKind::O], 10, 10);
        assert!(engine.tick(5_000));
        assert_eq!(engine.active().y, 1);
        assert_eq!(engine.fall_timer_ms(), 0);
    }

    #[test]
    fn test_blocked_move_down_by_two_does_not_lock() {
        let mut engine = engine_with(&[ShapeKind::O], 4, 3);
        assert_eq!(engine.try_move(0, 1), MoveResult::Moved);
        assert_eq!(engine.try_move(0, 2), MoveResult::Blocked);
        assert_eq!(engine.pieces_locked(), 0);
        assert_eq!(engine.active().y, 1);
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut engine = engine_with(&[ShapeKind::O, ShapeKind::T], 6, 4);
        assert!(engine.handle_intent(Intent::SoftDrop));
        assert!(engine.handle_intent(Intent::SoftDrop));
        assert_eq!(engine.active().y, 2);

        assert_eq!(engine.try_move(0, 1), MoveResult::Locked { lines: 0 });
        assert_eq!(engine.pieces_locked(), 1);
        assert!(engine.grid().is_occupied(2, 2));
        assert!(engine.grid().is_occupied(3, 3));
        assert_eq!(engine.active().kind, ShapeKind::T);
        assert_eq!(engine.active().y, 0);
    }

    #[test]
    fn test_rotate_blocked_by_floor() {
        // I lying on the floor of a 1-row grid cannot stand up
        let mut engine = engine_with(&[ShapeKind::I], 6, 1);
        let before = engine.active().clone();
        assert!(!engine.try_rotate());
        assert_eq!(engine.active(), &before);
    }

    #[test]
    fn test_rotate_replaces_shape_at_same_anchor() {
        let mut engine = engine_with(&[ShapeKind::L], 10, 10);
        let (x, y) = (engine.active().x, engine.active().y);
        assert!(engine.handle_intent(Intent::Rotate));
        assert_eq!((engine.active().x, engine.active().y), (x, y));
        assert_eq!(engine.active().shape, Shape::of(ShapeKind::L).rotated_cw());
    }

    #[test]
    fn test_clear_lines_does_not_score() {
        let grid = Grid::from_ascii(&["....", "....", "####"]);
        let mut engine = GameEngine::with_grid(
            EngineConfig::default(),
            grid,
            ScriptedShapes::repeat(ShapeKind::O),
        );
        assert_eq!(engine.clear_lines(), 1);
        assert_eq!(engine.score(), 0);
        assert!(!engine.grid().is_row_full(2));
    }

    #[test]
    fn test_snapshot_into_matches_snapshot() {
        let mut engine = engine_with(&[ShapeKind::S, ShapeKind::Z], 8, 6);
        for _ in 0..10 {
            engine.handle_intent(Intent::SoftDrop);
        }
        let mut out = engine_with(&[ShapeKind::I], 3, 3).snapshot();
        engine.snapshot_into(&mut out);
        assert_eq!(out, engine.snapshot());
    }
}
