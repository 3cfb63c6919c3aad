// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters for one subdivision run, indexed by [`Counters`] and by the kind of
//! each [`BranchFailure`], plus a trace of the frontier size.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::error::{BranchFailure, FailureKind};

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Successful triad selections.
    Expansions,
    /// States handed to the sink as terminal.
    Terminals,
}

const COUNT: usize = Counters::COUNT + BranchFailure::COUNT;

/// Frontier sizes kept in the trace. Later sizes only update the peak and
/// the final size.
pub const FRONTIER_TRACE_LIMIT: usize = 4096;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    stats: [u64; COUNT],
    /// Frontier length after each pop, starting with the initial size.
    frontier_sizes: Vec<usize>,
    peak_frontier: usize,
    final_frontier: usize,
    deepest: usize,
    truncated: bool,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one dropped branch.
    pub(crate) fn record_failure(&mut self, failure: &BranchFailure) {
        self.stats[Counters::COUNT + failure.kind() as usize] += 1;
    }

    pub(crate) fn record_frontier(&mut self, size: usize) {
        self.peak_frontier = self.peak_frontier.max(size);
        self.final_frontier = size;
        if self.frontier_sizes.len() < FRONTIER_TRACE_LIMIT {
            self.frontier_sizes.push(size);
        }
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        self.deepest = self.deepest.max(depth);
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of branches dropped for the given reason.
    pub fn failures(&self, kind: FailureKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// The first [`FRONTIER_TRACE_LIMIT`] frontier sizes of the run.
    pub fn frontier_sizes(&self) -> &[usize] {
        &self.frontier_sizes
    }

    /// Largest frontier seen during the run.
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    /// Frontier size when the run ended.
    pub fn final_frontier(&self) -> usize {
        self.final_frontier
    }

    /// Largest branch depth that was popped from the frontier.
    pub fn deepest(&self) -> usize {
        self.deepest
    }

    /// True if the expansion limit stopped the search with work left.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TriadSlot;

    #[test]
    fn test_counters_are_independent() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Expansions);
        stats.increment_counter(Counters::Expansions);
        stats.increment_counter(Counters::Terminals);
        stats.record_failure(&BranchFailure::NoCandidate {
            slot: TriadSlot::First,
            triad_index: 3,
        });

        assert_eq!(stats.get(Counters::Expansions), 2);
        assert_eq!(stats.get(Counters::Terminals), 1);
        assert_eq!(stats.failures(FailureKind::NoCandidate), 1);
        assert_eq!(stats.failures(FailureKind::DepthExceeded), 0);
        assert_eq!(stats.failures(FailureKind::TriadIndexOutOfRange), 0);
        assert_eq!(stats.failures(FailureKind::DegenerateTriad), 0);
    }

    #[test]
    fn test_depth_and_frontier() {
        let mut stats = Statistics::new();
        stats.record_depth(4);
        stats.record_depth(2);
        stats.record_frontier(1);
        stats.record_frontier(0);
        assert_eq!(stats.deepest(), 4);
        assert_eq!(stats.frontier_sizes(), &[1, 0]);
        assert_eq!(stats.peak_frontier(), 1);
        assert_eq!(stats.final_frontier(), 0);
        assert!(!stats.truncated());
    }

    #[test]
    fn test_frontier_trace_is_bounded() {
        let mut stats = Statistics::new();
        for size in 0..FRONTIER_TRACE_LIMIT + 500 {
            stats.record_frontier(size % 700);
        }
        stats.record_frontier(3);

        assert_eq!(stats.frontier_sizes().len(), FRONTIER_TRACE_LIMIT);
        assert_eq!(stats.frontier_sizes()[699], 699);
        assert_eq!(stats.peak_frontier(), 699);
        assert_eq!(stats.final_frontier(), 3);
    }
}
