// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adjacency-list graphs.
//!
//! A [`Graph`] maps every vertex to the ordered list of its neighbors.
//! The structure is undirected: every mutation keeps `u ∈ adj[v] ⟺ v ∈ adj[u]`.
//! Graphs built with [`Graph::from_adjacency`] are taken as given and can be
//! checked with [`Graph::validate`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::InvalidGraphError;
use crate::graph::{Edge, VertexKey};

/// Undirected graph in adjacency form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph<V: Ord> {
    adjacency: BTreeMap<V, Vec<V>>,
}

impl<V: VertexKey> Graph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a graph from an edge list, adding endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Wrap raw adjacency lists without checking them.
    ///
    /// Neighbor order is preserved. Use [`Graph::validate`] before relying on
    /// symmetry.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        Self {
            adjacency: adjacency
                .into_iter()
                .map(|(vertex, neighbors)| (vertex, neighbors.into_iter().collect()))
                .collect(),
        }
    }

    /// Add an isolated vertex. Existing vertices are left alone.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// Missing endpoints are created. Returns false (and changes nothing) if
    /// the edge was already present or `a == b`.
    pub fn add_edge(&mut self, a: V, b: V) -> bool {
        if a == b || self.has_edge(&a, &b) {
            return false;
        }
        self.adjacency.entry(a.clone()).or_default().push(b.clone());
        self.adjacency.entry(b).or_default().push(a);
        true
    }

    /// Check whether `a` lists `b` as a neighbor.
    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbors of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Number of distinct neighbors of `vertex`.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency
            .get(vertex)
            .map(|neighbors| neighbors.iter().collect::<BTreeSet<_>>().len())
    }

    /// Iterate over vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterate over `(vertex, neighbors)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.adjacency
            .iter()
            .map(|(vertex, neighbors)| (vertex, neighbors.as_slice()))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The undirected edge set, one entry per connected pair.
    pub fn edges(&self) -> BTreeSet<Edge<V>> {
        self.iter()
            .flat_map(|(vertex, neighbors)| {
                neighbors
                    .iter()
                    .map(move |neighbor| Edge::new(vertex.clone(), neighbor.clone()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Check that every neighbor exists, the relation is symmetric and there
    /// are no self-loops.
    pub fn validate(&self) -> Result<(), InvalidGraphError> {
        for (vertex, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                if neighbor == vertex {
                    return Err(InvalidGraphError::SelfLoop {
                        vertex: format!("{:?}", vertex),
                    });
                }
                match self.adjacency.get(neighbor) {
                    None => {
                        return Err(InvalidGraphError::DanglingNeighbor {
                            vertex: format!("{:?}", vertex),
                            neighbor: format!("{:?}", neighbor),
                        })
                    }
                    Some(back) if !back.contains(vertex) => {
                        return Err(InvalidGraphError::AsymmetricEdge {
                            vertex: format!("{:?}", vertex),
                            neighbor: format!("{:?}", neighbor),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// True when every listed edge has its reverse entry.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(vertex, neighbors)| {
            neighbors
                .iter()
                .all(|neighbor| self.has_edge(neighbor, vertex))
        })
    }
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
