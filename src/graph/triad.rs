// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triads: the unit of planar subdivision.
//!
//! A triad `(first, middle, second)` names a middle vertex together with its
//! two outer neighbors along the border. Selecting a triad joins the outer
//! vertices and moves the middle vertex off the border.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::graph::VertexKey;

/// Position inside a triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadSlot {
    First = 0,
    Middle = 1,
    Second = 2,
}

impl TriadSlot {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TriadSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriadSlot::First => write!(f, "first outer"),
            TriadSlot::Middle => write!(f, "middle"),
            TriadSlot::Second => write!(f, "second outer"),
        }
    }
}

/// An ordered vertex triple `(first, middle, second)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triad<V>([V; 3]);

impl<V: VertexKey> Triad<V> {
    pub fn new(first: V, middle: V, second: V) -> Self {
        Self([first, middle, second])
    }

    pub fn first(&self) -> &V {
        &self.0[0]
    }

    pub fn middle(&self) -> &V {
        &self.0[1]
    }

    pub fn second(&self) -> &V {
        &self.0[2]
    }

    /// Check whether `vertex` occupies any slot.
    pub fn contains(&self, vertex: &V) -> bool {
        self.0.contains(vertex)
    }

    /// The vertices in slot order.
    pub fn vertices(&self) -> &[V; 3] {
        &self.0
    }
}

impl<V> Index<TriadSlot> for Triad<V> {
    type Output = V;

    fn index(&self, slot: TriadSlot) -> &V {
        &self.0[slot as usize]
    }
}

impl<V: VertexKey> From<[V; 3]> for Triad<V> {
    fn from(vertices: [V; 3]) -> Self {
        Self(vertices)
    }
}

impl<V: VertexKey> From<(V, V, V)> for Triad<V> {
    fn from((first, middle, second): (V, V, V)) -> Self {
        Self::new(first, middle, second)
    }
}

impl<V: fmt::Debug> fmt::Display for Triad<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.0[0], self.0[1], self.0[2])
    }
}
