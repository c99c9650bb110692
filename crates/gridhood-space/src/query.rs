//! Neighbourhood query specification.

use crate::edge::EdgeBehavior;
use gridhood_core::{Adjacency, Coord, GridError, GridShape};

/// The full input of one neighbourhood enumeration.
///
/// A query is an immutable value: build it, hand it to
/// [`enumerate`](crate::enumerate), drop it. Defaults are a Moore
/// neighbourhood of radius 1 on a bounded grid, centre excluded.
///
/// # Examples
///
/// ```
/// use gridhood_space::{enumerate, Coord, GridShape, NeighborhoodQuery};
///
/// let shape = GridShape::new(10, 10).unwrap();
/// let q = NeighborhoodQuery::new(shape, Coord::new(5, 5))
///     .von_neumann()
///     .radius(1);
/// let cells = enumerate(&q).unwrap();
/// assert_eq!(
///     cells.as_slice(),
///     &[Coord::new(4, 5), Coord::new(5, 4), Coord::new(5, 6), Coord::new(6, 5)]
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborhoodQuery {
    shape: GridShape,
    center: Coord,
    adjacency: Adjacency,
    include_center: bool,
    radius: i32,
    edge: EdgeBehavior,
}

impl NeighborhoodQuery {
    /// Start a query around `center` on a grid of the given shape.
    pub fn new(shape: GridShape, center: Coord) -> Self {
        Self {
            shape,
            center,
            adjacency: Adjacency::Moore,
            include_center: false,
            radius: 1,
            edge: EdgeBehavior::Absorb,
        }
    }

    /// Use Moore adjacency (diagonals included).
    pub fn moore(self) -> Self {
        self.adjacency(Adjacency::Moore)
    }

    /// Use Von Neumann adjacency (diagonals excluded).
    pub fn von_neumann(self) -> Self {
        self.adjacency(Adjacency::VonNeumann)
    }

    /// Set the adjacency kind.
    pub fn adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Whether the centre cell is part of the result.
    pub fn include_center(mut self, include: bool) -> Self {
        self.include_center = include;
        self
    }

    /// Set the radius. Negative values are rejected by [`validate`](Self::validate).
    pub fn radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Wrap at the edges (torus) or not.
    pub fn wrap(self, wrap: bool) -> Self {
        self.edge(EdgeBehavior::from_wrap(wrap))
    }

    /// Set the edge behaviour.
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Centre coordinate, exactly as supplied.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Adjacency kind.
    pub fn adjacency_kind(&self) -> Adjacency {
        self.adjacency
    }

    /// Whether the centre is kept.
    pub fn includes_center(&self) -> bool {
        self.include_center
    }

    /// Requested radius.
    pub fn radius_value(&self) -> i32 {
        self.radius
    }

    /// Edge behaviour.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Check the preconditions of an enumeration.
    ///
    /// Returns `Err(GridError::InvalidRadius)` for a negative radius and
    /// `Err(GridError::OutOfDomainCenter)` for a bounded query centred off
    /// the grid. Toroidal queries accept any centre.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.radius < 0 {
            return Err(GridError::InvalidRadius {
                radius: self.radius,
            });
        }
        if !self.edge.is_wrap() && self.shape.out_of_bounds(self.center) {
            return Err(GridError::OutOfDomainCenter {
                center: self.center,
                bounds: self.shape.bounds_description(),
            });
        }
        Ok(())
    }
}
