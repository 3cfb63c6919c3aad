// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Two kinds of failure exist:
//!
//! - **Caller errors** ([`InvalidGraphError`], [`SubdivisionError`]) describe
//!   malformed input. They are returned before any work is done.
//! - **Branch failures** ([`BranchFailure`]) end a single branch of the
//!   subdivision search. The engine records them and keeps searching.

use serde::Serialize;
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants};
use thiserror::Error;

use crate::graph::TriadSlot;

/// Malformed adjacency or coloring input.
///
/// Vertex ids are generic, so they are carried here in their `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    /// A vertex lists a neighbor that has no adjacency entry of its own.
    #[error("vertex {vertex} lists neighbor {neighbor} which is not in the graph")]
    DanglingNeighbor { vertex: String, neighbor: String },

    /// `vertex` lists `neighbor` but not the other way round.
    #[error("edge {vertex} -> {neighbor} has no reverse entry")]
    AsymmetricEdge { vertex: String, neighbor: String },

    /// A vertex lists itself as a neighbor.
    #[error("vertex {vertex} is adjacent to itself")]
    SelfLoop { vertex: String },

    /// A coloring, border or triad refers to a vertex the graph does not have.
    #[error("vertex {vertex} is not in the graph")]
    UnknownVertex { vertex: String },
}

impl InvalidGraphError {
    pub(crate) fn unknown<V: fmt::Debug>(vertex: &V) -> Self {
        InvalidGraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }
}

/// Input rejected by the subdivision engine before the search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivisionError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraphError),

    /// The starting triad index does not address a triad of the input.
    #[error("start triad index {index} out of range for {len} triads")]
    StartIndexOutOfRange { index: usize, len: usize },
}

/// Why a single search branch was dropped.
///
/// These never abort the whole search. `DepthExceeded` branches are reported
/// as aborted entries, the others are counted and logged. [`FailureKind`]
/// names the variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumCountMacro, EnumDiscriminants)]
#[strum_discriminants(name(FailureKind), derive(Hash))]
pub enum BranchFailure {
    /// No remaining triad shares the selected triad's outer vertex.
    NoCandidate { slot: TriadSlot, triad_index: usize },

    /// The branch reached the configured step limit.
    DepthExceeded { depth: usize, max_depth: usize },

    /// The branch selects a triad index its triad list does not have.
    TriadIndexOutOfRange { index: usize, len: usize },

    /// The selected triad has the same vertex in both outer slots.
    DegenerateTriad { triad_index: usize },
}

impl BranchFailure {
    pub fn kind(&self) -> FailureKind {
        FailureKind::from(self)
    }
}

impl fmt::Display for BranchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchFailure::NoCandidate { slot, triad_index } => {
                write!(
                    f,
                    "Triad {} has no candidate sharing its {} vertex",
                    triad_index, slot
                )
            }
            BranchFailure::DepthExceeded { depth, max_depth } => {
                write!(f, "Branch depth {} reached limit {}", depth, max_depth)
            }
            BranchFailure::TriadIndexOutOfRange { index, len } => {
                write!(f, "Triad index {} out of range ({} triads)", index, len)
            }
            BranchFailure::DegenerateTriad { triad_index } => {
                write!(f, "Triad {} has equal outer vertices", triad_index)
            }
        }
    }
}

impl std::error::Error for BranchFailure {}
