// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common fixtures shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use triad_search::graph::{triads_from_border_cycle, Graph, Triad};
use triad_search::state::DecompositionState;

/// The six-triad sample structure used throughout the subdivision tests.
pub const SAMPLE_TRIADS: [[u32; 3]; 6] = [
    [0, 1, 3],
    [1, 3, 6],
    [0, 2, 5],
    [2, 5, 9],
    [9, 8, 7],
    [8, 7, 6],
];

/// Sample state: every triad contributes its two spokes to the graph, and all
/// nine vertices start on the border.
pub fn sample_state() -> DecompositionState<u32> {
    let mut graph = Graph::new();
    for [a, m, b] in SAMPLE_TRIADS {
        graph.add_edge(a, m);
        graph.add_edge(m, b);
    }
    DecompositionState::new(
        graph,
        BTreeSet::from([0, 2, 5, 9, 1, 3, 6, 8, 7]),
        SAMPLE_TRIADS.into_iter().map(Triad::from).collect(),
    )
}

/// The triangular grid `T_n` with the triads of its border cycle.
pub fn grid_state(n: u32) -> DecompositionState<u32> {
    let (graph, cycle) = Graph::triangular_grid(n);
    let triads = triads_from_border_cycle(&graph, &cycle);
    DecompositionState::new(graph, cycle.into_iter().collect(), triads)
}

/// Triangle 0-1-2.
pub fn triangle() -> Graph<u32> {
    Graph::from_edges([(0, 1), (1, 2), (2, 0)])
}

/// Assert the structural invariants every reachable state must satisfy.
pub fn assert_reachable(input: &DecompositionState<u32>, state: &DecompositionState<u32>) {
    assert!(state.graph.is_symmetric(), "adjacency lost symmetry");
    assert_eq!(state.graph.validate(), Ok(()));
    assert!(
        state.border.is_subset(&input.border),
        "border grew: {:?}",
        state.border
    );
    assert!(input.border.len() - state.border.len() <= state.triads_history.len());
    for consumed in &state.triads_history {
        assert!(!state.border.contains(consumed.middle()));
    }
    for edge in input.graph.edges() {
        assert!(state.graph.has_edge(edge.low(), edge.high()), "edge {} lost", edge);
    }
}
