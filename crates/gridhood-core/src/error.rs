//! Error types for grid construction and neighbourhood queries.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Precondition failures for grid and neighbourhood operations.
///
/// Every variant is raised before any cell is generated, so a failed
/// call never yields a partial neighbourhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The neighbourhood radius was negative.
    InvalidRadius {
        /// The rejected radius.
        radius: i32,
    },
    /// A grid dimension was zero or negative.
    InvalidGridShape {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A bounded (non-wrapping) query was centred outside the grid.
    OutOfDomainCenter {
        /// The offending centre.
        center: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A coordinate is outside the grid and the grid does not wrap.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::InvalidGridShape { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfDomainCenter { center, bounds } => {
                write!(f, "centre {center} outside non-wrapping grid {bounds}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for GridError {}
