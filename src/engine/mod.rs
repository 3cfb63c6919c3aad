// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triad subdivision search.
//!
//! The engine enumerates every way of consuming triads from a starting
//! [`DecompositionState`] until at most `terminal_threshold` triads remain.
//!
//! # Architecture
//!
//! The search is driven by an explicit LIFO frontier of frames. Each frame
//! owns its own state and records:
//! - The triad index the frame will select
//! - Its depth (selections made on this branch so far)
//!
//! One iteration of the loop:
//! 1. Pop a frame
//! 2. If its state is terminal: hand it to the sink
//! 3. If its depth reached `max_depth`: report it as aborted
//! 4. Apply the selection; on failure discard the branch and continue
//! 5. Push one child per triad of the resulting list, index 0 on top
//!
//! Children copy either the advanced state or the unmodified input, depending
//! on [`BranchMode`]. No state is shared between frames.
//!
//! [`SubdivisionEngine::subdivide`] seeds the frontier with one start index;
//! [`SubdivisionEngine::subdivide_all`] seeds one frame per input triad.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use triad_search::engine::{SubdivisionConfig, SubdivisionEngine};
//! use triad_search::graph::{Graph, Triad};
//! use triad_search::state::DecompositionState;
//!
//! let graph = Graph::from_edges([(0, 1), (1, 2), (0, 5), (2, 6), (7, 8), (8, 9)]);
//! let input = DecompositionState::new(
//!     graph,
//!     BTreeSet::from([0, 1, 2, 5, 6, 7, 8, 9]),
//!     vec![
//!         Triad::new(0, 1, 2),
//!         Triad::new(0, 1, 5),
//!         Triad::new(2, 1, 6),
//!         Triad::new(7, 8, 9),
//!     ],
//! );
//!
//! let engine = SubdivisionEngine::new(SubdivisionConfig::default());
//! let report = engine.subdivide(&input, 0).unwrap();
//! assert_eq!(report.distinct_terminals().len(), 1);
//! ```

pub mod config;
pub mod sink;

pub use config::{BranchMode, ConsumedTriads, SubdivisionConfig};
pub use sink::{AbortedBranch, DecompositionSink, SubdivisionReport};

use std::ops::ControlFlow;
use tracing::{debug, info, trace, warn};

use crate::error::{BranchFailure, SubdivisionError};
use crate::graph::{Border, Graph, Triad, VertexKey};
use crate::state::{Counters, DecompositionState, Statistics};

/// Initial frontier capacity.
const FRONTIER_CAPACITY: usize = 1024;

/// One pending branch.
#[derive(Debug)]
struct Frame<V: Ord> {
    state: DecompositionState<V>,
    /// Index of the triad this branch selects next.
    triad_index: usize,
    /// Selections made on this branch.
    depth: usize,
}

/// Enumerates terminal decompositions of a triad structure.
#[derive(Debug, Clone, Default)]
pub struct SubdivisionEngine {
    config: SubdivisionConfig,
}

impl SubdivisionEngine {
    pub fn new(config: SubdivisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SubdivisionConfig {
        &self.config
    }

    /// Run the search and collect every outcome.
    ///
    /// # Errors
    ///
    /// Fails before searching if `input` is malformed or `start` does not
    /// address one of its triads.
    pub fn subdivide<V: VertexKey>(
        &self,
        input: &DecompositionState<V>,
        start: usize,
    ) -> Result<SubdivisionReport<V>, SubdivisionError> {
        let mut report = SubdivisionReport::new();
        report.statistics = self.subdivide_into(input, start, &mut report)?;
        Ok(report)
    }

    /// Run the search, streaming outcomes into `sink`.
    ///
    /// Returns the run statistics.
    pub fn subdivide_into<V, S>(
        &self,
        input: &DecompositionState<V>,
        start: usize,
        sink: &mut S,
    ) -> Result<Statistics, SubdivisionError>
    where
        V: VertexKey,
        S: DecompositionSink<V>,
    {
        input.validate()?;
        let len = input.triads.len();
        if !input.is_terminal(self.config.terminal_threshold) && start >= len {
            return Err(SubdivisionError::StartIndexOutOfRange { index: start, len });
        }
        Ok(self.search(input, &[start], sink))
    }

    /// Run the search from every triad of `input` and collect every outcome.
    ///
    /// One root branch is seeded per triad index, index 0 explored first. A
    /// terminal input is reported once.
    pub fn subdivide_all<V: VertexKey>(
        &self,
        input: &DecompositionState<V>,
    ) -> Result<SubdivisionReport<V>, SubdivisionError> {
        let mut report = SubdivisionReport::new();
        report.statistics = self.subdivide_all_into(input, &mut report)?;
        Ok(report)
    }

    /// Streaming form of [`SubdivisionEngine::subdivide_all`].
    pub fn subdivide_all_into<V, S>(
        &self,
        input: &DecompositionState<V>,
        sink: &mut S,
    ) -> Result<Statistics, SubdivisionError>
    where
        V: VertexKey,
        S: DecompositionSink<V>,
    {
        input.validate()?;
        let starts: Vec<usize> = if input.is_terminal(self.config.terminal_threshold) {
            vec![0]
        } else {
            (0..input.triads.len()).collect()
        };
        Ok(self.search(input, &starts, sink))
    }

    /// The search loop over validated input, one root frame per start index.
    fn search<V, S>(
        &self,
        input: &DecompositionState<V>,
        starts: &[usize],
        sink: &mut S,
    ) -> Statistics
    where
        V: VertexKey,
        S: DecompositionSink<V>,
    {
        let mut stats = Statistics::new();
        if self.config.max_results == Some(0) {
            debug!("result limit is zero, nothing to search");
            return stats;
        }

        let mut frontier = Vec::with_capacity(FRONTIER_CAPACITY.max(starts.len()));
        for &start in starts.iter().rev() {
            frontier.push(Frame {
                state: input.clone(),
                triad_index: start,
                depth: 0,
            });
        }
        stats.record_frontier(frontier.len());

        let mut expansions = 0;
        while let Some(frame) = frontier.pop() {
            stats.record_frontier(frontier.len());
            stats.record_depth(frame.depth);

            if frame.state.is_terminal(self.config.terminal_threshold) {
                stats.increment_counter(Counters::Terminals);
                let stop = sink.terminal(frame.state).is_break()
                    || self
                        .config
                        .max_results
                        .is_some_and(|max| stats.get(Counters::Terminals) >= max as u64);
                if stop {
                    break;
                }
                continue;
            }

            if frame.depth >= self.config.max_depth {
                let failure = BranchFailure::DepthExceeded {
                    depth: frame.depth,
                    max_depth: self.config.max_depth,
                };
                debug!(triad_index = frame.triad_index, "{}", failure);
                stats.record_failure(&failure);
                let branch = AbortedBranch {
                    state: frame.state,
                    triad_index: frame.triad_index,
                    failure,
                };
                if sink.aborted(branch).is_break() {
                    break;
                }
                continue;
            }

            if expansions >= self.config.max_expansions {
                warn!(
                    max_expansions = self.config.max_expansions,
                    pending = frontier.len() + 1,
                    "expansion limit reached, stopping search"
                );
                stats.mark_truncated();
                break;
            }

            let Frame {
                mut state,
                triad_index,
                depth,
            } = frame;
            let selected = match state.apply(triad_index, self.config.consumed_triads) {
                Ok(selected) => selected,
                Err(failure) => {
                    debug!(depth, "{}", failure);
                    stats.record_failure(&failure);
                    sink.discarded(&state, &failure);
                    continue;
                }
            };
            expansions += 1;
            stats.increment_counter(Counters::Expansions);
            trace!(
                depth,
                %selected,
                remaining = state.triads.len(),
                "selected triad"
            );

            for index in (0..state.triads.len()).rev() {
                let child = match self.config.branch_mode {
                    BranchMode::FromState => state.clone(),
                    BranchMode::FromInput => input.clone(),
                };
                frontier.push(Frame {
                    state: child,
                    triad_index: index,
                    depth: depth + 1,
                });
            }
        }

        stats.record_frontier(frontier.len());
        info!(
            expansions = stats.get(Counters::Expansions),
            terminals = stats.get(Counters::Terminals),
            truncated = stats.truncated(),
            "subdivision finished"
        );
        stats
    }
}

/// Subdivide with the default configuration.
///
/// Convenience wrapper building the starting state from its parts.
pub fn subdivide<V: VertexKey>(
    graph: Graph<V>,
    border: Border<V>,
    triads: Vec<Triad<V>>,
    start: usize,
) -> Result<SubdivisionReport<V>, SubdivisionError> {
    SubdivisionEngine::default().subdivide(&DecompositionState::new(graph, border, triads), start)
}

/// Run `engine` with a closure as the terminal sink.
///
/// The closure returns `ControlFlow::Break(())` to stop the search.
pub fn for_each_terminal<V, F>(
    engine: &SubdivisionEngine,
    input: &DecompositionState<V>,
    start: usize,
    visit: F,
) -> Result<Statistics, SubdivisionError>
where
    V: VertexKey,
    F: FnMut(DecompositionState<V>) -> ControlFlow<()>,
{
    struct Visit<F>(F);

    impl<V: VertexKey, F: FnMut(DecompositionState<V>) -> ControlFlow<()>> DecompositionSink<V>
        for Visit<F>
    {
        fn terminal(&mut self, state: DecompositionState<V>) -> ControlFlow<()> {
            (self.0)(state)
        }
    }

    engine.subdivide_into(input, start, &mut Visit(visit))
}
