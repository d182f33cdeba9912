//! Shape module - the fixed catalog of seven shapes and clockwise rotation
//!
//! A shape is a small rectangular arrangement of occupied/empty cells, stored
//! row-major in stack-allocated `ArrayVec`s (at most 4x4). Catalog shapes are
//! templates: rotation always builds a new shape and never touches the input.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, MAX_SHAPE_SPAN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

type Row = ArrayVec<bool, MAX_SHAPE_SPAN>;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];

/// Template rows for a catalog kind (1 = occupied)
pub fn template(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::S => S_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::J => J_ROWS,
    }
}

/// Rejected shape input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or rows with no columns
    Empty,
    /// Rows of differing lengths
    Ragged { row: usize, expected: usize, found: usize },
    /// More than four rows or columns
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "shape has no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "shape row {} has {} columns, expected {}",
                row, found, expected
            ),
            Self::TooLarge { rows, cols } => write!(
                f,
                "shape is {}x{}, limit is {}x{}",
                rows, cols, MAX_SHAPE_SPAN, MAX_SHAPE_SPAN
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular binary cell arrangement
///
/// Serialized as nested arrays of booleans; deserializing goes through the
/// same checks as [`Shape::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct Shape {
    rows: ArrayVec<Row, MAX_SHAPE_SPAN>,
}

impl Shape {
    /// The catalog shape for `kind`, in spawn orientation
    pub fn of(kind: ShapeKind) -> Self {
        Self::from_template(template(kind))
    }

    /// Build a shape from rows of 0/1 cells (any non-zero is occupied)
    ///
    /// # Examples
    ///
    /// ```
    /// use mini_tetris_core::Shape;
    ///
    /// let bar = Shape::from_rows(&[&[1], &[1], &[1]]).unwrap();
    /// assert_eq!((bar.width(), bar.height()), (1, 3));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        check_dims(rows.len(), rows.iter().map(|r| r.len()))?;
        Ok(Self::from_template(rows))
    }

    // Callers guarantee the span limit; `take` keeps the ArrayVec pushes in bounds.
    fn from_template(rows: &[&[u8]]) -> Self {
        Self {
            rows: rows
                .iter()
                .take(MAX_SHAPE_SPAN)
                .map(|r| r.iter().take(MAX_SHAPE_SPAN).map(|&c| c != 0).collect())
                .collect(),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at (row, col) is occupied; out of range is empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Rows of the arrangement, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Occupied cells as `(row, col)` offsets from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Rotate 90° clockwise: transpose with row reversal
    ///
    /// The result is `width x height` where the input was `height x width`;
    /// `rotated[r][c] == self[h - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let h = self.height();
        let rows = (0..self.width())
            .map(|r| (0..h).map(|c| self.get(h - 1 - c, r)).collect())
            .collect();
        Self { rows }
    }
}

/// Non-empty, rectangular, within `MAX_SHAPE_SPAN` on both sides
fn check_dims(
    rows: usize,
    lens: impl Iterator<Item = usize> + Clone,
) -> Result<(), ShapeError> {
    let cols = lens.clone().next().unwrap_or(0);
    if cols == 0 {
        return Err(ShapeError::Empty);
    }
    if rows > MAX_SHAPE_SPAN || cols > MAX_SHAPE_SPAN {
        return Err(ShapeError::TooLarge { rows, cols });
    }
    if let Some((row, found)) = lens.enumerate().find(|&(_, len)| len != cols) {
        return Err(ShapeError::Ragged {
            row,
            expected: cols,
            found,
        });
    }
    Ok(())
}

impl TryFrom<Vec<Vec<bool>>> for Shape {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        check_dims(rows.len(), rows.iter().map(Vec::len))?;
        Ok(Self {
            rows: rows.into_iter().map(|r| r.into_iter().collect()).collect(),
        })
    }
}

impl From<Shape> for Vec<Vec<bool>> {
    fn from(shape: Shape) -> Self {
        shape.rows.iter().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_bits(shape: &Shape) -> Vec<Vec<u8>> {
        shape
            .rows()
            .map(|r| r.iter().map(|&c| c as u8).collect())
            .collect()
    }

    #[test]
    fn catalog_shapes_have_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(Shape::of(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = Shape::of(ShapeKind::T);
        let r = t.rotated_cw();
        assert_eq!(as_bits(&r), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
        // input untouched
        assert_eq!(as_bits(&t), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let l = Shape::of(ShapeKind::L);
        let r = l.rotated_cw();
        assert_eq!((l.width(), l.height()), (3, 2));
        assert_eq!((r.width(), r.height()), (2, 3));
    }

    #[test]
    fn cells_are_row_major() {
        let s = Shape::of(ShapeKind::S);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 1)]);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(Shape::from_rows(&[]), Err(ShapeError::Empty));
        assert_eq!(Shape::from_rows(&[&[]]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::from_rows(&[&[1, 1, 1, 1, 1]]),
            Err(ShapeError::TooLarge { rows: 1, cols: 5 })
        );
        assert_eq!(
            Shape::from_rows(&[&[1, 0], &[1]]),
            Err(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let o = Shape::of(ShapeKind::O);
        assert!(o.get(1, 1));
        assert!(!o.get(2, 0));
        assert!(!o.get(0, 2));
    }

    #[test]
    fn try_from_bool_rows_checks_dims() {
        let rows = vec![vec![false, true], vec![true, true]];
        let shape = Shape::try_from(rows.clone()).unwrap();
        assert_eq!(shape, Shape::from_rows(&[&[0, 1], &[1, 1]]).unwrap());
        assert_eq!(Vec::<Vec<bool>>::from(shape), rows);

        assert_eq!(Shape::try_from(Vec::new()), Err(ShapeError::Empty));
        assert_eq!(
            Shape::try_from(vec![vec![true, true], vec![true]]),
            Err(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Shape::try_from(vec![vec![true]; 5]),
            Err(ShapeError::TooLarge { rows: 5, cols: 1 })
        );
    }
}
