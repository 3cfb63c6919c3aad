// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coloring consistency checks and triad subdivision search for planar graphs.
//!
//! Two independent components share the adjacency-list [`Graph`]:
//!
//! ## Consistency evaluation
//!
//! [`coloring::evaluate`] takes a graph, a partial coloring and a parameter
//! `r`, and reports which vertices and edges violate r-dynamic coloring:
//! - A vertex is compromised when its neighbors show fewer than `min(r, degree)`
//!   distinct colors (uncolored neighbors count as one value)
//! - An edge is compromised when both endpoints have the same color
//!
//! The evaluation is pure and recomputed from scratch on each call.
//!
//! ## Triad subdivision
//!
//! A planar structure is described by a border set and a list of triads
//! `(outer, middle, outer)`. Selecting a triad joins its outer vertices,
//! drops its middle vertex from the border and replaces the consumed triads
//! with two derived ones. [`SubdivisionEngine`] enumerates every selection
//! sequence until at most three triads remain:
//!
//! 1. **DecompositionState**: value snapshot of graph, border, triads and history
//! 2. **apply**: one atomic selection step on a state
//! 3. **SubdivisionEngine**: explicit frontier over branches, each owning its state
//! 4. **DecompositionSink**: caller-supplied receiver for terminal and aborted states
//!
//! Branches that cannot be resolved are dropped without stopping the search.
//! Depth and expansion limits from [`SubdivisionConfig`] bound the run.
//!
//! # Logging
//!
//! The engine reports through `tracing` and never installs a subscriber.

pub mod coloring;
pub mod engine;
pub mod error;
pub mod graph;
pub mod state;

// Re-export commonly used types
pub use coloring::{evaluate, Color, Coloring, CompromiseReport};
pub use engine::{subdivide, SubdivisionConfig, SubdivisionEngine, SubdivisionReport};
pub use error::{BranchFailure, InvalidGraphError, SubdivisionError};
pub use graph::{Edge, Graph, Triad};
pub use state::DecompositionState;
