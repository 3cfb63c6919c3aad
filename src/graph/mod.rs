// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph value types.
//!
//! - VertexKey: bound satisfied by every usable vertex id (integers, strings, ...)
//! - Graph: undirected adjacency lists, symmetric after every edit
//! - Edge: normalised undirected edge, also used as the edge id
//! - Triad: ordered `(outer, middle, outer)` vertex triple
//! - Border: set of boundary vertices
//! - grid: triangular grid graphs `T_n` with their border cycle

pub mod adjacency;
pub mod border;
pub mod edge;
pub mod grid;
pub mod triad;

pub use adjacency::Graph;
pub use border::{triads_from_border_cycle, Border};
pub use edge::Edge;
pub use grid::{grid_coordinate, grid_vertex};
pub use triad::{Triad, TriadSlot};

use std::fmt::Debug;

/// Requirements on a vertex id.
///
/// Ordering keeps every map, set and enumeration deterministic.
pub trait VertexKey: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> VertexKey for T {}
