//! The [`Grid`] handle and shared 2D wrap helpers.

use crate::edge::EdgeBehavior;
use crate::neighborhood::{enumerate, Neighborhood};
use crate::query::NeighborhoodQuery;
use gridhood_core::{Adjacency, Coord, GridError, GridShape};

/// Non-negative modulo: the result lies in `[0, modulus)` whatever the
/// sign of `value`, so `floor_mod(-1, 5) == 4`.
///
/// `modulus` must be positive; every caller passes a [`GridShape`]
/// dimension, which is.
pub fn floor_mod(value: i64, modulus: i32) -> i32 {
    // In range for i32 because the result is below `modulus`.
    value.rem_euclid(i64::from(modulus)) as i32
}

/// Map an arbitrary coordinate onto the torus of the given shape.
pub(crate) fn wrap_coord(coord: Coord, shape: GridShape) -> Coord {
    Coord::new(
        floor_mod(i64::from(coord.x), shape.width()),
        floor_mod(i64::from(coord.y), shape.height()),
    )
}

/// A 2D grid: a [`GridShape`] plus an [`EdgeBehavior`].
///
/// The grid holds no cells. It exists so callers can fix the shape and
/// torus policy once and then ask for neighbourhoods by centre.
///
/// # Examples
///
/// ```
/// use gridhood_space::{Adjacency, Coord, EdgeBehavior, Grid};
///
/// let grid = Grid::new(5, 5, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(grid.torus_adj(Coord::new(-1, 7)).unwrap(), Coord::new(4, 2));
///
/// let n = grid.neighborhood(Coord::new(0, 0), Adjacency::VonNeumann, true, 1).unwrap();
/// assert_eq!(n.len(), 5);
/// assert!(n.contains(&Coord::new(4, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    shape: GridShape,
    edge: EdgeBehavior,
}

impl Grid {
    /// Create a `width * height` grid with the given edge behaviour.
    ///
    /// Returns `Err(GridError::InvalidGridShape)` if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32, edge: EdgeBehavior) -> Result<Self, GridError> {
        Ok(Self::from_shape(GridShape::new(width, height)?, edge))
    }

    /// Wrap an already-validated shape.
    pub fn from_shape(shape: GridShape, edge: EdgeBehavior) -> Self {
        Self { shape, edge }
    }

    /// Grid dimensions.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.shape.width()
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.shape.height()
    }

    /// Edge behaviour.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// `true` if the edges wrap.
    pub fn is_torus(&self) -> bool {
        self.edge.is_wrap()
    }

    /// `true` if `coord` lies off the grid.
    pub fn out_of_bounds(&self, coord: Coord) -> bool {
        self.shape.out_of_bounds(coord)
    }

    /// Bring `coord` onto the grid.
    ///
    /// In-bounds coordinates come back unchanged. Out-of-bounds ones are
    /// wrapped with [`floor_mod`] on a torus and rejected with
    /// `Err(GridError::CoordOutOfBounds)` otherwise.
    pub fn torus_adj(&self, coord: Coord) -> Result<Coord, GridError> {
        if !self.out_of_bounds(coord) {
            return Ok(coord);
        }
        if !self.is_torus() {
            return Err(GridError::CoordOutOfBounds {
                coord,
                bounds: self.shape.bounds_description(),
            });
        }
        Ok(wrap_coord(coord, self.shape))
    }

    /// A query around `center` preloaded with this grid's shape and edges.
    pub fn query(&self, center: Coord) -> NeighborhoodQuery {
        NeighborhoodQuery::new(self.shape, center).edge(self.edge)
    }

    /// Enumerate the neighbourhood of `center`.
    ///
    /// Shorthand for building a [`NeighborhoodQuery`] with [`query`](Self::query)
    /// and passing it to [`enumerate`].
    pub fn neighborhood(
        &self,
        center: Coord,
        adjacency: Adjacency,
        include_center: bool,
        radius: i32,
    ) -> Result<Neighborhood, GridError> {
        let q = self
            .query(center)
            .adjacency(adjacency)
            .include_center(include_center)
            .radius(radius);
        enumerate(&q)
    }

    /// Every cell, x outer and y inner: `(0,0), (0,1), ..., (w-1, h-1)`.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.shape.cell_count());
        for x in 0..self.width() {
            for y in 0..self.height() {
                out.push(Coord::new(x, y));
            }
        }
        out
    }
}
