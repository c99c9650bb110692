//! Neighbourhood adjacency kinds.

/// Which cells count as adjacent to a centre at a given radius.
///
/// # Examples
///
/// ```
/// use gridhood_core::Adjacency;
///
/// assert_eq!(Adjacency::from_moore(true), Adjacency::Moore);
/// assert!(!Adjacency::VonNeumann.is_moore());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Chebyshev ball: every cell within `radius` on both axes, diagonals included.
    #[default]
    Moore,
    /// Manhattan diamond: `|dx| + |dy| <= radius`, diagonals excluded.
    VonNeumann,
}

impl Adjacency {
    /// Map the boolean `moore` flag used by callers onto an adjacency kind.
    pub fn from_moore(moore: bool) -> Self {
        if moore {
            Self::Moore
        } else {
            Self::VonNeumann
        }
    }

    /// `true` for [`Adjacency::Moore`].
    pub fn is_moore(self) -> bool {
        matches!(self, Self::Moore)
    }
}
