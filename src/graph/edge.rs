// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected edges.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::VertexKey;

/// An undirected edge, stored with the smaller endpoint first.
///
/// Because the endpoints are normalised, `Edge::new(u, v) == Edge::new(v, u)`
/// and the edge doubles as its own id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    low: V,
    high: V,
}

impl<V: VertexKey> Edge<V> {
    /// Create an edge between `a` and `b` in either order.
    pub fn new(a: V, b: V) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller endpoint.
    pub fn low(&self) -> &V {
        &self.low
    }

    /// The larger endpoint.
    pub fn high(&self) -> &V {
        &self.high
    }

    /// Check whether `vertex` is an endpoint.
    pub fn touches(&self, vertex: &V) -> bool {
        &self.low == vertex || &self.high == vertex
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if &self.low == vertex {
            Some(&self.high)
        } else if &self.high == vertex {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl<V: fmt::Debug> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.low, self.high)
    }
}
