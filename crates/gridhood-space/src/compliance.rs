//! Neighbourhood compliance test helpers.
//!
//! These functions sweep every centre, adjacency, centre flag, and radius
//! of a small grid and check the invariants every enumeration must hold.
//! Reused by the bounded and toroidal test modules.

use crate::grid2d::Grid;
use crate::neighborhood::Neighborhood;
use gridhood_core::{Adjacency, Coord};
use gridhood_test_utils::reference_neighborhood;
use indexmap::IndexSet;

const ADJACENCIES: [Adjacency; 2] = [Adjacency::Moore, Adjacency::VonNeumann];

/// Radii up to one past the longer side, enough to hit every clamp.
fn radii(grid: &Grid) -> std::ops::RangeInclusive<i32> {
    0..=grid.width().max(grid.height()) + 1
}

fn run(grid: &Grid, center: Coord, adjacency: Adjacency, include: bool, r: i32) -> Neighborhood {
    grid.neighborhood(center, adjacency, include, r)
        .unwrap_or_else(|e| panic!("enumerate({center}, {adjacency:?}, {include}, {r}): {e}"))
}

/// Assert every cell is on the grid and none repeats.
pub fn assert_contained_and_distinct(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for adjacency in ADJACENCIES {
            for include in [false, true] {
                for r in radii(grid) {
                    let n = run(grid, center, adjacency, include, r);
                    let unique: IndexSet<Coord> = n.iter().copied().collect();
                    assert_eq!(
                        unique.len(),
                        n.len(),
                        "duplicates around {center} r={r} {adjacency:?} on {grid:?}"
                    );
                    for cell in &n {
                        assert!(
                            !grid.out_of_bounds(*cell),
                            "{cell} off grid around {center} r={r} on {grid:?}"
                        );
                    }
                }
            }
        }
    }
}

/// Assert the result set equals the brute-force distance oracle.
pub fn assert_matches_reference(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for adjacency in ADJACENCIES {
            for include in [false, true] {
                for r in radii(grid) {
                    let mut got = run(grid, center, adjacency, include, r).into_vec();
                    got.sort();
                    let want = reference_neighborhood(
                        grid.shape(),
                        center,
                        adjacency,
                        include,
                        r,
                        grid.is_torus(),
                    );
                    assert_eq!(
                        got, want,
                        "around {center} r={r} {adjacency:?} include={include} on {grid:?}"
                    );
                }
            }
        }
    }
}

/// Assert that dropping the centre removes exactly that one cell and
/// leaves the rest in the same order.
pub fn assert_center_toggle(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for adjacency in ADJACENCIES {
            for r in radii(grid) {
                let with = run(grid, center, adjacency, true, r);
                let without = run(grid, center, adjacency, false, r);
                assert!(with.contains(&center));
                assert!(!without.contains(&center));
                let filtered: Vec<Coord> = with.iter().copied().filter(|c| *c != center).collect();
                assert_eq!(filtered.as_slice(), without.as_slice());
            }
        }
    }
}

/// Assert the Von Neumann result is a subset of the Moore result.
pub fn assert_von_neumann_within_moore(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for include in [false, true] {
            for r in radii(grid) {
                let moore = run(grid, center, Adjacency::Moore, include, r);
                let vn = run(grid, center, Adjacency::VonNeumann, include, r);
                for cell in &vn {
                    assert!(
                        moore.contains(cell),
                        "{cell} in VN but not Moore around {center}"
                    );
                }
            }
        }
    }
}

/// Assert radius 0 yields `{center}` or nothing.
pub fn assert_radius_zero(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for adjacency in ADJACENCIES {
            assert_eq!(run(grid, center, adjacency, true, 0).as_slice(), &[center]);
            assert!(run(grid, center, adjacency, false, 0).is_empty());
        }
    }
}

/// Assert two calls return the same sequence, and that bounded grids emit
/// cells in ascending `(x, y)` order.
pub fn assert_deterministic_order(grid: &Grid) {
    for center in grid.canonical_ordering() {
        for adjacency in ADJACENCIES {
            for r in radii(grid) {
                let a = run(grid, center, adjacency, true, r);
                let b = run(grid, center, adjacency, true, r);
                assert_eq!(a, b, "non-deterministic around {center} r={r}");
                if !grid.is_torus() {
                    assert!(a.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }
}

/// Assert every centre has the same neighbourhood size. Holds on a torus
/// with odd sides.
pub fn assert_homogeneous(grid: &Grid) {
    let cells = grid.canonical_ordering();
    for adjacency in ADJACENCIES {
        for include in [false, true] {
            for r in radii(grid) {
                let sizes: IndexSet<usize> = cells
                    .iter()
                    .map(|&c| run(grid, c, adjacency, include, r).len())
                    .collect();
                assert_eq!(sizes.len(), 1, "sizes {sizes:?} at r={r} on {grid:?}");
            }
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_contained_and_distinct(grid);
    assert_matches_reference(grid);
    assert_center_toggle(grid);
    assert_von_neumann_within_moore(grid);
    assert_radius_zero(grid);
    assert_deterministic_order(grid);
}
