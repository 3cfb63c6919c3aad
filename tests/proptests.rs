// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for the evaluator and the subdivision engine.

mod common;

use std::collections::BTreeSet;

use common::assert_reachable;
use proptest::prelude::*;
use triad_search::coloring::{evaluate, Color, Coloring};
use triad_search::engine::{SubdivisionConfig, SubdivisionEngine};
use triad_search::graph::{Graph, Triad};
use triad_search::state::DecompositionState;

const VERTICES: u32 = 8;

fn graph_strategy() -> impl Strategy<Value = Graph<u32>> {
    prop::collection::vec((0..VERTICES, 0..VERTICES), 0..20).prop_map(|edges| {
        let mut graph = Graph::new();
        for v in 0..VERTICES {
            graph.add_vertex(v);
        }
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    })
}

fn coloring_strategy() -> impl Strategy<Value = Coloring<u32>> {
    prop::collection::vec(prop::option::of(0..4u32), VERTICES as usize).prop_map(|colors| {
        colors
            .into_iter()
            .enumerate()
            .filter_map(|(v, color)| color.map(|c| (v as u32, c)))
            .collect()
    })
}

fn triad_strategy() -> impl Strategy<Value = Triad<u32>> {
    (0..VERTICES, 0..VERTICES, 0..VERTICES)
        .prop_filter("triad vertices must differ", |(a, m, b)| {
            a != m && m != b && a != b
        })
        .prop_map(|(a, m, b)| Triad::new(a, m, b))
}

fn cycle_state(triads: Vec<Triad<u32>>) -> DecompositionState<u32> {
    let graph = Graph::from_edges((0..VERTICES).map(|v| (v, (v + 1) % VERTICES)));
    DecompositionState::new(graph, (0..VERTICES).collect(), triads)
}

proptest! {
    #[test]
    fn prop_edge_flags_match_equal_colors(
        graph in graph_strategy(),
        coloring in coloring_strategy(),
        r in 1usize..5,
    ) {
        let report = evaluate(&graph, &coloring, r).unwrap();
        for edge in graph.edges() {
            let (a, b) = (coloring.get(edge.low()), coloring.get(edge.high()));
            let clash = a.is_some() && a == b;
            prop_assert_eq!(report.edges.contains(&edge), clash, "edge {}", edge);
        }
        prop_assert!(report.edges.iter().all(|edge| graph.has_edge(edge.low(), edge.high())));
    }

    #[test]
    fn prop_vertex_flags_match_neighbor_diversity(
        graph in graph_strategy(),
        coloring in coloring_strategy(),
        r in 1usize..5,
    ) {
        let report = evaluate(&graph, &coloring, r).unwrap();
        for (vertex, neighbors) in graph.iter() {
            let seen: BTreeSet<Option<Color>> =
                neighbors.iter().map(|n| coloring.get(n)).collect();
            let degree = graph.degree(vertex).unwrap_or(0);
            let compromised = seen.len() < r.min(degree);
            prop_assert_eq!(report.vertices.contains(vertex), compromised, "vertex {}", vertex);
        }
    }

    #[test]
    fn prop_evaluate_is_idempotent(
        graph in graph_strategy(),
        coloring in coloring_strategy(),
        r in 1usize..5,
    ) {
        let first = evaluate(&graph, &coloring, r).unwrap();
        let second = evaluate(&graph, &coloring, r).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_subdivision_keeps_invariants(
        triads in prop::collection::vec(triad_strategy(), 4..8),
        start in 0usize..8,
    ) {
        let start = start % triads.len();
        let input = cycle_state(triads);
        let engine = SubdivisionEngine::new(
            SubdivisionConfig::new()
                .with_max_depth(4)
                .with_max_expansions(200),
        );
        let report = engine.subdivide(&input, start).unwrap();

        for state in &report.terminals {
            prop_assert!(state.triads.len() <= 3);
            assert_reachable(&input, state);
        }
        for branch in &report.aborted {
            prop_assert!(branch.state.triads.len() > 3);
            prop_assert_eq!(branch.state.triads_history.len(), 4);
            assert_reachable(&input, &branch.state);
        }
        prop_assert!(report.statistics.deepest() <= 4);
    }
}
