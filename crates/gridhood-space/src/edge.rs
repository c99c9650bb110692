//! Grid edge (boundary) behaviour.

/// How a grid treats cells past its edges.
///
/// # Examples
///
/// ```
/// use gridhood_space::{Adjacency, Coord, EdgeBehavior, Grid};
///
/// // Absorb: a Moore radius-1 corner has 3 neighbours, an interior cell 8.
/// let absorb = Grid::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// let corner = Coord::new(0, 0);
/// let interior = Coord::new(1, 1);
/// assert_eq!(absorb.neighborhood(corner, Adjacency::Moore, false, 1).unwrap().len(), 3);
/// assert_eq!(absorb.neighborhood(interior, Adjacency::Moore, false, 1).unwrap().len(), 8);
///
/// // Wrap: every cell has 8 (torus).
/// let wrap = Grid::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighborhood(corner, Adjacency::Moore, false, 1).unwrap().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Off-grid cells are omitted (bounded grid, fewer neighbours at edges).
    #[default]
    Absorb,
    /// Off-grid cells wrap to the opposite side (torus).
    Wrap,
}

impl EdgeBehavior {
    /// Map the boolean `torus` flag used by callers onto an edge behaviour.
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Self::Wrap
        } else {
            Self::Absorb
        }
    }

    /// `true` for [`EdgeBehavior::Wrap`].
    pub fn is_wrap(self) -> bool {
        matches!(self, Self::Wrap)
    }
}
