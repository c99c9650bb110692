//! Neighbourhood enumeration for 2D grids.
//!
//! This crate answers one question: which cells lie within a given radius
//! of a centre cell? It supports Moore and Von Neumann adjacency, bounded
//! and toroidal edges, and including or excluding the centre.
//!
//! # Entry points
//!
//! - [`enumerate`]: run a [`NeighborhoodQuery`] and get a [`Neighborhood`].
//! - [`Grid`]: fix a shape and [`EdgeBehavior`] once, then ask by centre.
//!
//! Enumeration is pure: no caching, no shared state, a fresh result per
//! call. All types are `Send + Sync`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod grid2d;
pub mod neighborhood;
pub mod query;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use grid2d::{floor_mod, Grid};
pub use gridhood_core::{Adjacency, Coord, GridError, GridShape};
pub use neighborhood::{enumerate, max_neighborhood_count, Neighborhood};
pub use query::NeighborhoodQuery;
