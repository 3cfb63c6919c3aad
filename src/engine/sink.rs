// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Receivers for search outcomes.
//!
//! The engine never accumulates results itself. Every outcome goes to a
//! caller-supplied [`DecompositionSink`]; [`SubdivisionReport`] is the
//! collecting sink used by [`SubdivisionEngine::subdivide`].
//!
//! [`SubdivisionEngine::subdivide`]: crate::engine::SubdivisionEngine::subdivide

use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::ControlFlow;

use crate::error::BranchFailure;
use crate::graph::VertexKey;
use crate::state::{DecompositionState, Statistics};

/// A branch cut short by the depth limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "V: Serialize"))]
pub struct AbortedBranch<V: Ord> {
    /// The state the branch held when it was stopped.
    pub state: DecompositionState<V>,
    /// The triad index it was about to select.
    pub triad_index: usize,
    pub failure: BranchFailure,
}

/// Visitor for subdivision outcomes.
///
/// `terminal` and `aborted` may return `ControlFlow::Break(())` to end the
/// search early.
pub trait DecompositionSink<V: VertexKey> {
    /// A leaf state: at most the terminal threshold of triads remain.
    fn terminal(&mut self, state: DecompositionState<V>) -> ControlFlow<()>;

    /// A branch that hit the depth limit.
    fn aborted(&mut self, branch: AbortedBranch<V>) -> ControlFlow<()> {
        let _ = branch;
        ControlFlow::Continue(())
    }

    /// A branch dropped because its selection could not be carried out.
    fn discarded(&mut self, state: &DecompositionState<V>, failure: &BranchFailure) {
        let _ = (state, failure);
    }
}

/// Collected result of a subdivision run.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "V: Serialize"))]
pub struct SubdivisionReport<V: Ord> {
    pub terminals: Vec<DecompositionState<V>>,
    pub aborted: Vec<AbortedBranch<V>>,
    pub statistics: Statistics,
}

impl<V: VertexKey> SubdivisionReport<V> {
    pub fn new() -> Self {
        Self {
            terminals: Vec::new(),
            aborted: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Terminal states with duplicates removed, in discovery order.
    ///
    /// Two states are duplicates when graph, border and remaining triads
    /// agree; the history is ignored.
    pub fn distinct_terminals(&self) -> Vec<&DecompositionState<V>> {
        let mut seen = BTreeSet::new();
        self.terminals
            .iter()
            .filter(|state| seen.insert((&state.graph, &state.border, &state.triads)))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String>
    where
        V: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

impl<V: VertexKey> Default for SubdivisionReport<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> DecompositionSink<V> for SubdivisionReport<V> {
    fn terminal(&mut self, state: DecompositionState<V>) -> ControlFlow<()> {
        self.terminals.push(state);
        ControlFlow::Continue(())
    }

    fn aborted(&mut self, branch: AbortedBranch<V>) -> ControlFlow<()> {
        self.aborted.push(branch);
        ControlFlow::Continue(())
    }
}
