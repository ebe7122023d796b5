//! A boolean occupancy table describing which tiles can be stood on.
//!
//! [`WalkGrid`] is the simplest backing store for walkability queries: one
//! flag per tile, row-major, with everything outside its bounds treated as
//! blocked. Maps that carry richer terrain data usually keep their own
//! representation and answer walkability queries directly instead.

use std::fmt;

use crate::geom::{Point, Range};

/// Row-major table of walkable flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWalkGrid"))]
pub struct WalkGrid {
    bounds: Range,
    cells: Vec<bool>,
}

/// Unchecked serialized form; cell count is validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWalkGrid {
    bounds: Range,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWalkGrid> for WalkGrid {
    type Error = GridError;

    fn try_from(raw: RawWalkGrid) -> Result<Self, GridError> {
        let (min, max) = (raw.bounds.min, raw.bounds.max);
        if max.x.checked_sub(min.x).is_none() || max.y.checked_sub(min.y).is_none() {
            return Err(GridError::TooLarge);
        }
        if raw.cells.len() != raw.bounds.len() {
            return Err(GridError::CellCount {
                expected: raw.bounds.len(),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            bounds: raw.bounds,
            cells: raw.cells,
        })
    }
}

impl WalkGrid {
    /// Create a grid where every tile is blocked.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, false)
    }

    /// Create a grid with every tile set to `walkable`.
    ///
    /// Negative dimensions produce an empty grid.
    pub fn filled(width: i32, height: i32, walkable: bool) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            cells: vec![walkable; bounds.len()],
        }
    }

    /// Build a grid from map rows, where any non-zero value is walkable.
    ///
    /// `rows[y][x]` describes the tile at `(x, y)`. All rows must have the
    /// same length.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| v != 0));
        }
        let width = i32::try_from(width).map_err(|_| GridError::TooLarge)?;
        let height = i32::try_from(rows.len()).map_err(|_| GridError::TooLarge)?;
        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            cells,
        })
    }

    /// The tiles covered by this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid and marked walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Mark a tile as walkable or blocked. Does nothing out of bounds.
    pub fn set(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Number of walkable tiles.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    /// The first walkable tile in row-major order.
    ///
    /// Used to place an agent somewhere valid when its requested spawn tile
    /// is blocked or outside the map.
    pub fn first_walkable(&self) -> Option<Point> {
        self.bounds.iter().find(|&p| self.is_walkable(p))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }
}

/// Errors that can occur when building a [`WalkGrid`] from map rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The map does not fit in `i32` coordinates.
    TooLarge,
    /// The cell table does not cover the grid bounds exactly.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "walk grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge => write!(f, "walk grid: dimensions exceed i32 range"),
            Self::CellCount { expected, found } => write!(
                f,
                "walk grid: {found} cells stored, bounds cover {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_blocked() {
        let g = WalkGrid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.count_walkable(), 0);
        assert_eq!(g.first_walkable(), None);
    }

    #[test]
    fn set_and_query() {
        let mut g = WalkGrid::new(4, 4);
        g.set(Point::new(2, 3), true);
        assert!(g.is_walkable(Point::new(2, 3)));
        assert!(!g.is_walkable(Point::new(3, 2)));
        // Out of bounds writes are ignored, reads are blocked.
        g.set(Point::new(10, 10), true);
        assert!(!g.is_walkable(Point::new(10, 10)));
        assert!(!g.is_walkable(Point::new(-1, 0)));
        assert_eq!(g.count_walkable(), 1);
    }

    #[test]
    fn from_rows_nonzero_is_walkable() {
        let g = WalkGrid::from_rows(&[vec![0, 1, 0], vec![2, 0, -1]]).unwrap();
        assert_eq!(g.bounds(), Range::new(0, 0, 3, 2));
        assert!(!g.is_walkable(Point::new(0, 0)));
        assert!(g.is_walkable(Point::new(1, 0)));
        assert!(g.is_walkable(Point::new(0, 1)));
        assert!(g.is_walkable(Point::new(2, 1)));
        assert_eq!(g.count_walkable(), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = WalkGrid::from_rows(&[vec![1, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "walk grid: row 1 has 1 cells, expected 2");
    }

    #[test]
    fn from_rows_empty() {
        let g = WalkGrid::from_rows(&[]).unwrap();
        assert!(g.bounds().is_empty());
        assert_eq!(g.first_walkable(), None);
    }

    #[test]
    fn first_walkable_scans_row_major() {
        let mut g = WalkGrid::new(5, 5);
        g.set(Point::new(4, 1), true);
        g.set(Point::new(0, 2), true);
        assert_eq!(g.first_walkable(), Some(Point::new(4, 1)));
    }

    #[test]
    fn negative_size_is_empty() {
        let g = WalkGrid::filled(-3, 4, true);
        assert_eq!(g.count_walkable(), 0);
        assert!(!g.is_walkable(Point::ZERO));
    }
}
