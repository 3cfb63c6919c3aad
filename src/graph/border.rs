// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Border vertices and border-cycle triads.

use std::collections::BTreeSet;

use crate::graph::{Graph, Triad, VertexKey};

/// Vertices on the outer boundary of the current structure.
///
/// A border only ever loses vertices during subdivision.
pub type Border<V> = BTreeSet<V>;

/// Derive the initial triads of an ordered border cycle.
///
/// Every cycle position `i` contributes `(cycle[i-1], cycle[i], cycle[i+1])`,
/// wrapping at both ends, unless its outer vertices are already adjacent in
/// `graph`. Cycles shorter than three vertices have no triads.
pub fn triads_from_border_cycle<V: VertexKey>(graph: &Graph<V>, cycle: &[V]) -> Vec<Triad<V>> {
    let len = cycle.len();
    if len < 3 {
        return Vec::new();
    }

    (0..len)
        .map(|i| {
            Triad::new(
                cycle[(i + len - 1) % len].clone(),
                cycle[i].clone(),
                cycle[(i + 1) % len].clone(),
            )
        })
        .filter(|triad| !graph.has_edge(triad.first(), triad.second()))
        .collect()
}
