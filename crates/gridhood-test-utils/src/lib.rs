//! Test utilities for gridhood development.
//!
//! Provides a brute-force [`reference_neighborhood`] oracle that decides
//! membership cell by cell from distances alone, independent of the
//! enumerator's loop structure, plus [`strategies`] for property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use gridhood_core::{Adjacency, Coord, GridShape};
use indexmap::IndexSet;

pub use strategies::{arb_adjacency, arb_case, arb_shape, QueryCase};

/// Distance along one axis; on a torus, the shorter way round.
fn axis_distance(a: i32, b: i32, len: i32, wrap: bool) -> i64 {
    let diff = (i64::from(a) - i64::from(b)).abs();
    if wrap {
        let diff = diff % i64::from(len);
        diff.min(i64::from(len) - diff)
    } else {
        diff
    }
}

/// Every cell within `radius` of `center`, sorted ascending.
///
/// Scans the whole grid and keeps a cell when its Chebyshev (Moore) or
/// Manhattan (Von Neumann) distance to the centre is at most `radius`.
/// On a torus, per-axis distances take the shorter way round and the
/// centre is compared through its wrapped image. Slow but obviously
/// correct; use on small grids only.
///
/// Panics on a negative radius, or on a bounded grid with an off-grid centre.
pub fn reference_neighborhood(
    shape: GridShape,
    center: Coord,
    adjacency: Adjacency,
    include_center: bool,
    radius: i32,
    wrap: bool,
) -> Vec<Coord> {
    assert!(radius >= 0, "reference oracle needs radius >= 0");
    assert!(
        wrap || shape.contains(center),
        "reference oracle needs an on-grid centre for a bounded grid"
    );
    let home = Coord::new(
        center.x.rem_euclid(shape.width()),
        center.y.rem_euclid(shape.height()),
    );
    let r = i64::from(radius);
    let mut out = Vec::new();
    for x in 0..shape.width() {
        for y in 0..shape.height() {
            let cell = Coord::new(x, y);
            if cell == home && !include_center {
                continue;
            }
            let dx = axis_distance(x, home.x, shape.width(), wrap);
            let dy = axis_distance(y, home.y, shape.height(), wrap);
            let d = match adjacency {
                Adjacency::Moore => dx.max(dy),
                Adjacency::VonNeumann => dx + dy,
            };
            if d <= r {
                out.push(cell);
            }
        }
    }
    out
}

/// Collect `cells` into an insertion-ordered set, panicking on the first
/// repeat.
pub fn assert_distinct<'a>(cells: impl IntoIterator<Item = &'a Coord>) -> IndexSet<Coord> {
    let mut set = IndexSet::new();
    for cell in cells {
        assert!(set.insert(*cell), "{cell} appears more than once");
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(w: i32, h: i32) -> GridShape {
        GridShape::new(w, h).unwrap()
    }

    #[test]
    fn axis_distance_wraps_short_way() {
        assert_eq!(axis_distance(0, 9, 10, true), 1);
        assert_eq!(axis_distance(0, 9, 10, false), 9);
        assert_eq!(axis_distance(0, 2, 4, true), 2);
    }

    #[test]
    fn bounded_von_neumann_radius_one() {
        let got = reference_neighborhood(
            shape(10, 10),
            Coord::new(5, 5),
            Adjacency::VonNeumann,
            false,
            1,
            false,
        );
        assert_eq!(
            got,
            vec![
                Coord::new(4, 5),
                Coord::new(5, 4),
                Coord::new(5, 6),
                Coord::new(6, 5),
            ]
        );
    }

    #[test]
    fn torus_whole_grid_at_half_radius() {
        let got = reference_neighborhood(
            shape(4, 4),
            Coord::new(0, 0),
            Adjacency::Moore,
            true,
            2,
            true,
        );
        assert_eq!(got.len(), 16);
    }

    #[test]
    #[should_panic(expected = "appears more than once")]
    fn assert_distinct_catches_repeat() {
        let cells = [Coord::new(1, 1), Coord::new(1, 1)];
        assert_distinct(&cells);
    }
}
