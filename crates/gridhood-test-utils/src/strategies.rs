//! Proptest strategies for neighbourhood queries.
//!
//! The strategies produce plain data ([`QueryCase`]) rather than a
//! `NeighborhoodQuery` so this crate only depends on `gridhood-core`.

use gridhood_core::{Adjacency, Coord, GridShape};
use proptest::prelude::*;

/// The raw parameters of one enumeration call.
#[derive(Clone, Copy, Debug)]
pub struct QueryCase {
    pub shape: GridShape,
    pub center: Coord,
    pub adjacency: Adjacency,
    pub include_center: bool,
    pub radius: i32,
    pub wrap: bool,
}

/// Grid shapes with sides in `1..=max_side`.
pub fn arb_shape(max_side: i32) -> impl Strategy<Value = GridShape> {
    (1..=max_side, 1..=max_side).prop_map(|(w, h)| {
        // Sides are positive by construction.
        GridShape::new(w, h).unwrap_or_else(|e| unreachable!("{e}"))
    })
}

/// Either adjacency kind.
pub fn arb_adjacency() -> impl Strategy<Value = Adjacency> {
    prop_oneof![Just(Adjacency::Moore), Just(Adjacency::VonNeumann)]
}

/// A valid query case: on-grid centre when bounded, any centre in
/// `-3 * max_side..3 * max_side` when wrapping, radius up to `max_radius`.
pub fn arb_case(max_side: i32, max_radius: i32) -> impl Strategy<Value = QueryCase> {
    (
        arb_shape(max_side),
        any::<bool>(),
        arb_adjacency(),
        any::<bool>(),
        0..=max_radius,
    )
        .prop_flat_map(move |(shape, wrap, adjacency, include_center, radius)| {
            let center = if wrap {
                let span = 3 * max_side;
                ((-span..span), (-span..span)).boxed()
            } else {
                ((0..shape.width()), (0..shape.height())).boxed()
            };
            center.prop_map(move |(x, y)| QueryCase {
                shape,
                center: Coord::new(x, y),
                adjacency,
                include_center,
                radius,
                wrap,
            })
        })
}
