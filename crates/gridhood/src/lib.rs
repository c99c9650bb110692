//! Gridhood: neighbourhood enumeration for 2D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridhood sub-crates. For most users, adding `gridhood` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridhood::prelude::*;
//!
//! // A 30x30 bounded grid, Moore radius 10 around (10, 10), centre kept.
//! let grid = Grid::new(30, 30, EdgeBehavior::Absorb).unwrap();
//! let cells = grid
//!     .neighborhood(Coord::new(10, 10), Adjacency::Moore, true, 10)
//!     .unwrap();
//! assert_eq!(cells.len(), 441);
//!
//! // The same shape as a torus, Von Neumann radius 1, centre dropped.
//! let shape = GridShape::new(10, 10).unwrap();
//! let q = NeighborhoodQuery::new(shape, Coord::new(0, 0))
//!     .von_neumann()
//!     .radius(1)
//!     .wrap(true);
//! let cells = enumerate(&q).unwrap();
//! assert_eq!(
//!     cells.as_slice(),
//!     &[Coord::new(9, 0), Coord::new(0, 9), Coord::new(0, 1), Coord::new(1, 0)]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridhood-core` | `Coord`, `GridShape`, `Adjacency`, `GridError` |
//! | [`space`] | `gridhood-space` | Queries, the enumerator, `Grid`, edge behaviour |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the error type (`gridhood-core`).
pub use gridhood_core as types;

/// Neighbourhood queries and enumeration (`gridhood-space`).
///
/// [`space::enumerate`] is the single entry point; [`space::Grid`] wraps it
/// for callers that keep one shape and edge policy.
pub use gridhood_space as space;

/// Common imports for typical gridhood usage.
///
/// ```rust
/// use gridhood::prelude::*;
/// ```
pub mod prelude {
    pub use gridhood_core::{Adjacency, Coord, GridError, GridShape};
    pub use gridhood_space::{enumerate, EdgeBehavior, Grid, Neighborhood, NeighborhoodQuery};
}
