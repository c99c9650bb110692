//! Grid dimensions and the out-of-bounds predicate.

use crate::coord::Coord;
use crate::error::GridError;

/// Width and height of a rectangular grid.
///
/// The valid coordinate domain is `[0, width) x [0, height)`. Both
/// dimensions are strictly positive; [`GridShape::new`] rejects anything
/// else, so a `GridShape` in hand is always non-empty.
///
/// # Examples
///
/// ```
/// use gridhood_core::{Coord, GridShape};
///
/// let shape = GridShape::new(4, 3).unwrap();
/// assert_eq!(shape.cell_count(), 12);
/// assert!(shape.out_of_bounds(Coord::new(4, 0)));
/// assert!(!shape.out_of_bounds(Coord::new(3, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    width: i32,
    height: i32,
}

impl GridShape {
    /// Create a shape of `width * height` cells.
    ///
    /// Returns `Err(GridError::InvalidGridShape)` if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidGridShape { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns (extent of the x axis).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows (extent of the y axis).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// `true` if `coord` lies off the grid on either axis.
    pub fn out_of_bounds(&self, coord: Coord) -> bool {
        coord.x < 0 || coord.x >= self.width || coord.y < 0 || coord.y >= self.height
    }

    /// `true` if `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        !self.out_of_bounds(coord)
    }

    /// The valid domain as text, for error messages.
    pub fn bounds_description(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.height)
    }
}
