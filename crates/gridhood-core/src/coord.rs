//! The [`Coord`] cell coordinate.

use std::fmt;

/// A cell coordinate `(x, y)` in a 2D grid.
///
/// Coordinates are signed: a caller may hand a torus query a centre that
/// lies outside the grid, and intermediate wrap arithmetic goes negative
/// before the modulo is applied. Nothing about a `Coord` on its own says
/// whether it is inside a grid; see [`GridShape::out_of_bounds`].
///
/// Ordering is lexicographic on `(x, y)`, which matches the order the
/// enumerator emits cells in (x outer, y inner).
///
/// [`GridShape::out_of_bounds`]: crate::GridShape::out_of_bounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column (first axis).
    pub x: i32,
    /// Row (second axis).
    pub y: i32,
}

impl Coord {
    /// Build a coordinate from its two components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`, without any wraparound.
    pub fn manhattan(self, other: Coord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx + dy
    }

    /// Chebyshev (L-inf) distance to `other`, without any wraparound.
    pub fn chebyshev(self, other: Coord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tuple_conversions() {
        let c: Coord = (3, -4).into();
        assert_eq!(c, Coord::new(3, -4));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (3, -4));
    }

    #[test]
    fn ordering_is_x_then_y() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(-1, 7).to_string(), "(-1, 7)");
    }

    #[test]
    fn distances_do_not_overflow_at_extremes() {
        let a = Coord::new(i32::MIN, i32::MIN);
        let b = Coord::new(i32::MAX, i32::MAX);
        let span = u64::from(u32::MAX);
        assert_eq!(a.chebyshev(b), span);
        assert_eq!(a.manhattan(b), 2 * span);
    }

    proptest! {
        #[test]
        fn chebyshev_never_exceeds_manhattan(
            ax in -1000i32..1000, ay in -1000i32..1000,
            bx in -1000i32..1000, by in -1000i32..1000,
        ) {
            let a = Coord::new(ax, ay);
            let b = Coord::new(bx, by);
            prop_assert!(a.chebyshev(b) <= a.manhattan(b));
            prop_assert!(a.manhattan(b) <= 2 * a.chebyshev(b));
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
        }
    }
}
