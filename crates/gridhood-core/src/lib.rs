//! Core types for the gridhood neighbourhood enumerator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared by the rest of the workspace:
//! coordinates, grid shapes, adjacency kinds, and the error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod coord;
pub mod error;
pub mod shape;

pub use adjacency::Adjacency;
pub use coord::Coord;
pub use error::GridError;
pub use shape::GridShape;
