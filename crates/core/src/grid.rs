//! Grid module - occupancy matrix, collision checks and line clearing
//!
//! The grid is `width x height` cells, each either empty or occupied.
//! Uses a flat row-major `Vec<bool>` sized once at construction; the
//! dimensions never change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::shape::Shape;

/// Fixed-size occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Occupancy at (x, y), `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c))
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&self.cells[y * w..(y + 1) * w])
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether `shape` with its top-left cell at (x, y) would overlap a wall,
    /// the floor, or an occupied cell
    ///
    /// Cells above the top edge also count as a collision. The engine never
    /// tests negative rows (pieces spawn at row 0 and only move down or
    /// sideways), so this only matters to direct callers.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.cells().any(|(r, c)| {
            let cx = x + c as i32;
            let cy = y + r as i32;
            match self.get(cx, cy) {
                Some(occupied) => occupied,
                None => true,
            }
        })
    }

    /// Mark every occupied cell of `shape` at (x, y) as occupied
    ///
    /// Cells outside the grid are skipped. Callers lock only positions that
    /// already passed [`Grid::collides`].
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32) {
        for (r, c) in shape.cells() {
            self.set(x + c as i32, y + r as i32, true);
        }
    }

    /// Remove every full row, shifting the rest down; returns the count
    ///
    /// Single stable pass, bottom to top: non-full rows are copied down to a
    /// write cursor, then everything above the cursor is emptied. Adjacent and
    /// simultaneous clears (up to the full height) are handled uniformly.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(false);
        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a grid from text rows, `#` occupied and anything else empty
    ///
    /// Intended for tests and fixtures; rows shorter than the widest are
    /// padded with empty cells.
    ///
    /// ```
    /// use mini_tetris_core::Grid;
    ///
    /// let grid = Grid::from_ascii(&["....", "##.#"]);
    /// assert_eq!((grid.width(), grid.height()), (4, 2));
    /// assert!(grid.is_occupied(0, 1));
    /// assert!(!grid.is_occupied(2, 1));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x as i32, y as i32, ch == '#');
            }
        }
        grid
    }
}
