// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colors and partial colorings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::graph::VertexKey;

/// A color index.
///
/// Newtype wrapper so colors are not mixed up with vertex ids or counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A partial vertex coloring.
///
/// Vertices without an entry are uncolored. The coloring is not required to be
/// proper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring<V: Ord> {
    colors: BTreeMap<V, Color>,
}

impl<V: VertexKey> Coloring<V> {
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Color of `vertex`, or None when uncolored.
    pub fn get(&self, vertex: &V) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    /// Assign `color` to `vertex`, returning the previous color.
    pub fn set(&mut self, vertex: V, color: Color) -> Option<Color> {
        self.colors.insert(vertex, color)
    }

    /// Remove any color from `vertex`, returning it.
    pub fn clear(&mut self, vertex: &V) -> Option<Color> {
        self.colors.remove(vertex)
    }

    /// Assign `color`, or uncolor the vertex if it already has that color.
    ///
    /// Returns the color the vertex ends up with.
    pub fn toggle(&mut self, vertex: V, color: Color) -> Option<Color> {
        if self.get(&vertex) == Some(color) {
            self.colors.remove(&vertex);
            None
        } else {
            self.colors.insert(vertex, color);
            Some(color)
        }
    }

    /// Iterate over colored vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> {
        self.colors.iter().map(|(vertex, color)| (vertex, *color))
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<V: VertexKey> Default for Coloring<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey, C: Into<Color>> FromIterator<(V, C)> for Coloring<V> {
    fn from_iter<I: IntoIterator<Item = (V, C)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(vertex, color)| (vertex, color.into()))
                .collect(),
        }
    }
}
