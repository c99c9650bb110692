//! Neighbourhood enumeration on bounded and toroidal grids.
//!
//! [`enumerate`] has two branches selected by the query's
//! [`EdgeBehavior`](crate::EdgeBehavior):
//!
//! - **Absorb** clips the bounding box of the radius to the grid and walks
//!   it directly, with no modulo arithmetic.
//! - **Wrap** walks signed offsets around the centre and wraps each one
//!   with [`floor_mod`]. The offset range per axis is clamped to half the
//!   axis length, and trimmed by one at the top when the clamp is hit on
//!   an even-length axis, so no wrapped cell is visited twice.
//!
//! Both branches emit cells x-outer, y-inner, ascending in the loop
//! variable, and both pre-size the output to the number of cells the loops
//! can visit.

use crate::grid2d::{floor_mod, wrap_coord};
use crate::query::NeighborhoodQuery;
use gridhood_core::{Coord, GridError};
use smallvec::SmallVec;
use std::ops::Deref;

/// Upper bound on the size of any neighbourhood of the given radius:
/// the `(2r + 1)^2` Moore square with the centre included.
///
/// Saturates at `usize::MAX` rather than overflowing.
pub fn max_neighborhood_count(radius: u32) -> usize {
    let side = 2 * u64::from(radius) + 1;
    usize::try_from(side.saturating_mul(side)).unwrap_or(usize::MAX)
}

/// The ordered cells of one neighbourhood.
///
/// Entries are distinct and on the grid. Radius-1 neighbourhoods (at most
/// nine cells) are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    cells: SmallVec<[Coord; 9]>,
}

impl Neighborhood {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: SmallVec::with_capacity(capacity),
        }
    }

    fn push(&mut self, coord: Coord) {
        self.cells.push(coord);
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cell was produced.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in emission order.
    pub fn as_slice(&self) -> &[Coord] {
        &self.cells
    }

    /// Iterate the cells in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// `true` if `coord` is in the neighbourhood.
    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }

    /// The first cell emitted, if any.
    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Take the cells as a `Vec`.
    pub fn into_vec(self) -> Vec<Coord> {
        self.cells.into_vec()
    }
}

impl Deref for Neighborhood {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.cells
    }
}

impl IntoIterator for Neighborhood {
    type Item = Coord;
    type IntoIter = smallvec::IntoIter<[Coord; 9]>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Enumerate the neighbourhood described by `query`.
///
/// Fails with `GridError::InvalidRadius` or `GridError::OutOfDomainCenter`
/// (bounded queries only) before generating anything; see
/// [`NeighborhoodQuery::validate`].
///
/// On a torus an off-grid centre is first mapped onto the grid, so with
/// `include_center(false)` it is its wrapped image that gets dropped.
///
/// # Examples
///
/// ```
/// use gridhood_space::{enumerate, Coord, GridShape, NeighborhoodQuery};
///
/// let shape = GridShape::new(30, 30).unwrap();
/// let q = NeighborhoodQuery::new(shape, Coord::new(10, 10))
///     .moore()
///     .include_center(true)
///     .radius(10);
/// let cells = enumerate(&q).unwrap();
/// assert_eq!(cells.len(), 21 * 21);
/// assert_eq!(cells.first(), Some(Coord::new(0, 0)));
/// ```
pub fn enumerate(query: &NeighborhoodQuery) -> Result<Neighborhood, GridError> {
    query.validate()?;
    if query.edge_behavior().is_wrap() {
        Ok(toroidal(query))
    } else {
        Ok(bounded(query))
    }
}

/// Clipped bounding-box walk; the centre is on the grid.
fn bounded(query: &NeighborhoodQuery) -> Neighborhood {
    let shape = query.shape();
    let center = query.center();
    let moore = query.adjacency_kind().is_moore();
    let include_center = query.includes_center();
    let r = i64::from(query.radius_value());
    let x = i64::from(center.x);
    let y = i64::from(center.y);

    let x_from = (x - r).max(0);
    let x_to = (x + r + 1).min(i64::from(shape.width()));
    let y_from = (y - r).max(0);
    let y_to = (y + r + 1).min(i64::from(shape.height()));

    let mut out = Neighborhood::with_capacity(((x_to - x_from) * (y_to - y_from)) as usize);
    for nx in x_from..x_to {
        for ny in y_from..y_to {
            // Post-clip coordinates; equal to the offsets since nothing wrapped.
            if !moore && (nx - x).abs() + (ny - y).abs() > r {
                continue;
            }
            if !include_center && nx == x && ny == y {
                continue;
            }
            out.push(Coord::new(nx as i32, ny as i32));
        }
    }
    out
}

/// Per-axis offset range `[-radius, end)` for the torus walk.
///
/// The radius is clamped to `len / 2`. When the clamp is hit on an even
/// axis the top offset is dropped, since `-len/2` and `+len/2` wrap to the
/// same cell.
fn torus_axis_range(radius: i64, len: i32) -> (i64, i64) {
    let max_radius = i64::from(len / 2);
    let axis_radius = radius.min(max_radius);
    let even = len % 2 == 0;
    let k = i64::from(axis_radius == max_radius && even);
    (-axis_radius, axis_radius + 1 - k)
}

/// Offset walk with floor-mod wrapping.
fn toroidal(query: &NeighborhoodQuery) -> Neighborhood {
    let shape = query.shape();
    let moore = query.adjacency_kind().is_moore();
    let include_center = query.includes_center();
    let r = i64::from(query.radius_value());
    // Off-grid centres are excluded through their image on the torus.
    let center = wrap_coord(query.center(), shape);
    let x = i64::from(center.x);
    let y = i64::from(center.y);

    let (dx_from, dx_to) = torus_axis_range(r, shape.width());
    let (dy_from, dy_to) = torus_axis_range(r, shape.height());

    let mut out = Neighborhood::with_capacity(((dx_to - dx_from) * (dy_to - dy_from)) as usize);
    for dx in dx_from..dx_to {
        for dy in dy_from..dy_to {
            // Unwrapped offsets against the unclamped radius.
            if !moore && dx.abs() + dy.abs() > r {
                continue;
            }
            let n = Coord::new(
                floor_mod(x + dx, shape.width()),
                floor_mod(y + dy, shape.height()),
            );
            if !include_center && n == center {
                continue;
            }
            out.push(n);
        }
    }
    out
}
