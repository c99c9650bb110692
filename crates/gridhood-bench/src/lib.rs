//! Benchmark profiles and utilities for gridhood.
//!
//! Provides pre-built [`NeighborhoodQuery`] profiles for benchmarking:
//!
//! - [`reference_query`]: 30x30 bounded grid, Moore radius 10 around (10, 10)
//! - [`torus_query`]: the same on a torus
//! - [`von_neumann_query`]: the reference query with Von Neumann adjacency
//! - [`small_torus_query`]: 4x4 torus at half-side radius (duplicate trim path)
//! - [`sample_centers`]: deterministic centre placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridhood_core::{Coord, GridError, GridShape};
use gridhood_space::{Neighborhood, NeighborhoodQuery};

/// Environment variable that turns on per-profile summaries on stderr.
pub const VERBOSE_ENV: &str = "GRIDHOOD_BENCH_VERBOSE";

fn shape(width: i32, height: i32) -> Result<GridShape, GridError> {
    GridShape::new(width, height)
}

/// The fixed call the original timing scripts repeat: 30x30 bounded grid,
/// centre (10, 10), Moore, centre included, radius 10.
pub fn reference_query() -> Result<NeighborhoodQuery, GridError> {
    Ok(NeighborhoodQuery::new(shape(30, 30)?, Coord::new(10, 10))
        .moore()
        .include_center(true)
        .radius(10)
        .wrap(false))
}

/// [`reference_query`] on a torus.
pub fn torus_query() -> Result<NeighborhoodQuery, GridError> {
    Ok(reference_query()?.wrap(true))
}

/// [`reference_query`] with Von Neumann adjacency.
pub fn von_neumann_query() -> Result<NeighborhoodQuery, GridError> {
    Ok(reference_query()?.von_neumann())
}

/// 4x4 torus, centre (0, 0), Moore radius 2: the radius equals half an
/// even side, so both axes take the trimmed offset range.
pub fn small_torus_query() -> Result<NeighborhoodQuery, GridError> {
    Ok(NeighborhoodQuery::new(shape(4, 4)?, Coord::new(0, 0))
        .moore()
        .include_center(true)
        .radius(2)
        .wrap(true))
}

/// Generate `n` deterministic centres on `shape`.
///
/// Uses a simple multiplicative hash of the seed so runs are repeatable
/// without pulling in an RNG. Centres may repeat.
pub fn sample_centers(shape: GridShape, n: usize, seed: u64) -> Vec<Coord> {
    let w = shape.width() as u64;
    let h = shape.height() as u64;
    (0..n as u64)
        .map(|i| {
            let a = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let b = a.wrapping_mul(2862933555777941757).rotate_left(17);
            Coord::new((a % w) as i32, (b % h) as i32)
        })
        .collect()
}

/// Print a one-line summary of a profile to stderr when
/// [`VERBOSE_ENV`] is set.
pub fn report(label: &str, query: &NeighborhoodQuery, result: &Neighborhood) {
    if std::env::var_os(VERBOSE_ENV).is_none() {
        return;
    }
    let shape = query.shape();
    eprintln!(
        "gridhood-bench: {label}: {}x{} {:?} r={} centre {} -> {} cells",
        shape.width(),
        shape.height(),
        query.adjacency_kind(),
        query.radius_value(),
        query.center(),
        result.len(),
    );
}
