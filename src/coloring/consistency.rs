// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! r-dynamic consistency of a partial coloring.
//!
//! A vertex `v` of degree `d` is *compromised* when its neighbors show fewer
//! than `min(r, d)` distinct colors. Uncolored neighbors count together as one
//! extra "no color" value. An edge is compromised when both endpoints carry
//! the same assigned color; an uncolored endpoint never compromises an edge.
//!
//! Results are recomputed from scratch on every call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::coloring::{Color, Coloring};
use crate::error::InvalidGraphError;
use crate::graph::{Edge, Graph, VertexKey};

/// Vertices and edges that violate the r-dynamic constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Ord"
))]
pub struct CompromiseReport<V> {
    pub vertices: BTreeSet<V>,
    pub edges: BTreeSet<Edge<V>>,
}

impl<V: VertexKey> CompromiseReport<V> {
    /// True when nothing is compromised.
    pub fn is_consistent(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}

/// Evaluate `coloring` on `graph` against the r-dynamic constraint.
///
/// # Errors
///
/// Returns [`InvalidGraphError`] when the adjacency is malformed or the
/// coloring names a vertex missing from the graph.
///
/// # Example
///
/// ```
/// use triad_search::coloring::{evaluate, Coloring};
/// use triad_search::graph::{Edge, Graph};
///
/// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let coloring: Coloring<u32> = [(0, 0u32), (1, 1), (2, 0)].into_iter().collect();
///
/// let report = evaluate(&triangle, &coloring, 2).unwrap();
/// assert!(report.edges.contains(&Edge::new(0, 2)));
/// assert!(!report.vertices.contains(&0));
/// ```
pub fn evaluate<V: VertexKey>(
    graph: &Graph<V>,
    coloring: &Coloring<V>,
    r: usize,
) -> Result<CompromiseReport<V>, InvalidGraphError> {
    graph.validate()?;
    if let Some((vertex, _)) = coloring.iter().find(|(vertex, _)| !graph.contains(vertex)) {
        return Err(InvalidGraphError::unknown(vertex));
    }

    let mut vertices = BTreeSet::new();
    let mut edges = BTreeSet::new();

    for (vertex, neighbors) in graph.iter() {
        let own = coloring.get(vertex);
        let distinct_neighbors: BTreeSet<&V> = neighbors.iter().collect();
        let mut seen: BTreeSet<Option<Color>> = BTreeSet::new();

        for &neighbor in &distinct_neighbors {
            let theirs = coloring.get(neighbor);
            seen.insert(theirs);
            if own.is_some() && theirs == own {
                edges.insert(Edge::new(vertex.clone(), neighbor.clone()));
            }
        }

        if seen.len() < r.min(distinct_neighbors.len()) {
            vertices.insert(vertex.clone());
        }
    }

    Ok(CompromiseReport { vertices, edges })
}
