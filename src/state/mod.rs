// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state values and run statistics.

pub mod decomposition;
pub mod statistics;

pub use decomposition::{candidate_vertex, ConsumedTriads, DecompositionState};
pub use statistics::{Counters, Statistics, FRONTIER_TRACE_LIMIT};
