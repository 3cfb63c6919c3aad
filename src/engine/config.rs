// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search limits and policies.
//!
//! # Example
//!
//! ```
//! use triad_search::engine::{BranchMode, SubdivisionConfig};
//!
//! let config: SubdivisionConfig =
//!     serde_json::from_str(r#"{ "max_depth": 4, "branch_mode": "from_input" }"#).unwrap();
//! assert_eq!(config.max_depth, 4);
//! assert_eq!(config.branch_mode, BranchMode::FromInput);
//! assert_eq!(config.terminal_threshold, 3);
//! ```

use serde::{Deserialize, Serialize};

pub use crate::state::ConsumedTriads;

/// Default per-branch step limit.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default global limit on successful selections.
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;

/// Triad count at or below which a state is a leaf.
pub const DEFAULT_TERMINAL_THRESHOLD: usize = 3;

/// Where child branches start from after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchMode {
    /// Children continue from the state the selection produced.
    #[default]
    FromState,
    /// Children restart from a copy of the unmodified input and only differ in
    /// the triad index they select.
    FromInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubdivisionConfig {
    /// Steps a single branch may take before it is aborted.
    pub max_depth: usize,
    /// Successful selections allowed across the whole run.
    pub max_expansions: usize,
    /// Stop once this many terminal states were produced.
    pub max_results: Option<usize>,
    pub terminal_threshold: usize,
    pub branch_mode: BranchMode,
    pub consumed_triads: ConsumedTriads,
}

impl SubdivisionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_terminal_threshold(mut self, threshold: usize) -> Self {
        self.terminal_threshold = threshold;
        self
    }

    pub fn with_branch_mode(mut self, mode: BranchMode) -> Self {
        self.branch_mode = mode;
        self
    }

    pub fn with_consumed_triads(mut self, consumed: ConsumedTriads) -> Self {
        self.consumed_triads = consumed;
        self
    }
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_results: None,
            terminal_threshold: DEFAULT_TERMINAL_THRESHOLD,
            branch_mode: BranchMode::default(),
            consumed_triads: ConsumedTriads::default(),
        }
    }
}
