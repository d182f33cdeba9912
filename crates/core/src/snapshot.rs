use crate::engine::ActivePiece;
use crate::shape::Shape;
use crate::types::{RunState, ShapeKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of the piece's occupied cells
    pub fn grid_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }
}

/// Read-only view of one engine state, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub width: u16,
    pub height: u16,
    /// Locked cells, row-major (y * width + x)
    pub cells: Vec<bool>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub state: RunState,
}

impl Snapshot {
    /// Locked occupancy at (x, y); out of bounds is empty
    ///
    /// A `cells` buffer shorter than `width * height` reads as empty past its
    /// end.
    pub fn is_locked(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.cells.get(idx).copied().unwrap_or(false)
    }

    pub fn running(&self) -> bool {
        self.state.is_running()
    }
}
