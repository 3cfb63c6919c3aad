// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decomposition states and the single triad-selection step.
//!
//! A [`DecompositionState`] is a plain value: the graph, the border, the
//! triads still available and the triads consumed so far. Search branches
//! own independent clones, so siblings never observe each other's edits.
//!
//! # The step
//!
//! Selecting triad `(a, m, b)`:
//!
//! 1. Sorts the other triads into two buckets: those containing `a`, then
//!    (only if they do not contain `a`) those containing `b`.
//! 2. Resolves one replacement vertex per bucket from the bucket's first
//!    triad (see [`candidate_vertex`]).
//! 3. Joins `a` and `b` in the graph.
//! 4. Drops the selected triad and every triad consumed with `m`.
//! 5. Appends `(x, a, b)` and `(a, b, y)`.
//! 6. Removes `m` from the border and records the selected triad.

use serde::{Deserialize, Serialize};

use crate::error::{BranchFailure, InvalidGraphError};
use crate::graph::{Border, Graph, Triad, TriadSlot, VertexKey};

/// Which remaining triads disappear along with a consumed middle vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumedTriads {
    /// Triads whose middle is the consumed vertex.
    #[default]
    SharedMiddle,
    /// Triads that mention the consumed vertex in any slot.
    AnyPosition,
}

impl ConsumedTriads {
    fn is_consumed<V: VertexKey>(self, triad: &Triad<V>, middle: &V) -> bool {
        match self {
            ConsumedTriads::SharedMiddle => triad.middle() == middle,
            ConsumedTriads::AnyPosition => triad.contains(middle),
        }
    }
}

/// Snapshot of one point on a subdivision path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Ord"
))]
pub struct DecompositionState<V: Ord> {
    pub graph: Graph<V>,
    pub border: Border<V>,
    pub triads: Vec<Triad<V>>,
    /// Triads consumed to reach this state, oldest first.
    pub triads_history: Vec<Triad<V>>,
}

impl<V: VertexKey> DecompositionState<V> {
    /// Starting state with an empty history.
    pub fn new(graph: Graph<V>, border: Border<V>, triads: Vec<Triad<V>>) -> Self {
        Self {
            graph,
            border,
            triads,
            triads_history: Vec::new(),
        }
    }

    /// Check the graph and that every border and triad vertex belongs to it.
    pub fn validate(&self) -> Result<(), InvalidGraphError> {
        self.graph.validate()?;
        let vertices = self
            .border
            .iter()
            .chain(self.triads.iter().flat_map(|triad| triad.vertices().iter()));
        for vertex in vertices {
            if !self.graph.contains(vertex) {
                return Err(InvalidGraphError::unknown(vertex));
            }
        }
        Ok(())
    }

    pub fn remaining_triads(&self) -> &[Triad<V>] {
        &self.triads
    }

    /// A state is terminal once at most `threshold` triads remain.
    pub fn is_terminal(&self, threshold: usize) -> bool {
        self.triads.len() <= threshold
    }

    /// Split the triads other than `index` into the two outer-vertex buckets.
    ///
    /// A triad containing both outer vertices lands only in the first bucket.
    pub fn candidate_buckets(&self, index: usize) -> (Vec<&Triad<V>>, Vec<&Triad<V>>) {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let Some(selected) = self.triads.get(index) else {
            return (first, second);
        };

        for (i, triad) in self.triads.iter().enumerate() {
            if i == index {
                continue;
            }
            if triad.contains(selected.first()) {
                first.push(triad);
            } else if triad.contains(selected.second()) {
                second.push(triad);
            }
        }
        (first, second)
    }

    /// Select triad `index` and advance the state by one step.
    ///
    /// Returns the consumed triad. On failure the state is left untouched.
    /// A triad whose outer vertices coincide cannot be joined and fails with
    /// [`BranchFailure::DegenerateTriad`].
    pub fn apply(
        &mut self,
        index: usize,
        consumed: ConsumedTriads,
    ) -> Result<Triad<V>, BranchFailure> {
        let selected = self
            .triads
            .get(index)
            .cloned()
            .ok_or(BranchFailure::TriadIndexOutOfRange {
                index,
                len: self.triads.len(),
            })?;
        if selected.first() == selected.second() {
            return Err(BranchFailure::DegenerateTriad { triad_index: index });
        }

        let (first_bucket, second_bucket) = self.candidate_buckets(index);
        let x = candidate_vertex(&selected, &first_bucket, TriadSlot::First).ok_or(
            BranchFailure::NoCandidate {
                slot: TriadSlot::First,
                triad_index: index,
            },
        )?;
        let y = candidate_vertex(&selected, &second_bucket, TriadSlot::Second).ok_or(
            BranchFailure::NoCandidate {
                slot: TriadSlot::Second,
                triad_index: index,
            },
        )?;

        let (a, m, b) = (selected.first(), selected.middle(), selected.second());
        let joined_first = Triad::new(x, a.clone(), b.clone());
        let joined_second = Triad::new(a.clone(), b.clone(), y);

        self.graph.add_edge(a.clone(), b.clone());

        self.triads.remove(index);
        self.triads.retain(|triad| !consumed.is_consumed(triad, m));
        self.triads.push(joined_first);
        self.triads.push(joined_second);

        self.border.remove(m);
        self.triads_history.push(selected.clone());

        Ok(selected)
    }
}

/// Resolve the replacement vertex for one outer slot of `selected`.
///
/// Only the first triad of the bucket is consulted. If that candidate's middle
/// is the selected triad's vertex at `terminal`, the answer is the candidate's
/// outer vertex that is not the selected middle (checked through its first
/// slot); otherwise it is the candidate's middle. Returns None for an empty
/// bucket.
pub fn candidate_vertex<V: VertexKey>(
    selected: &Triad<V>,
    bucket: &[&Triad<V>],
    terminal: TriadSlot,
) -> Option<V> {
    let candidate = bucket.first()?;
    let vertex = if selected[terminal] == *candidate.middle() {
        if selected.middle() == candidate.first() {
            candidate.second()
        } else {
            candidate.first()
        }
    } else {
        candidate.middle()
    };
    Some(vertex.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample() -> DecompositionState<u32> {
        let triads = [[0, 1, 3], [1, 3, 6], [0, 2, 5], [2, 5, 9], [9, 8, 7], [8, 7, 6]];
        let mut graph = Graph::new();
        for [a, m, b] in triads {
            graph.add_edge(a, m);
            graph.add_edge(m, b);
        }
        let border = BTreeSet::from([0, 2, 5, 9, 1, 3, 6, 8, 7]);
        DecompositionState::new(graph, border, triads.into_iter().map(Triad::from).collect())
    }

    fn triads(raw: &[[u32; 3]]) -> Vec<Triad<u32>> {
        raw.iter().map(|t| Triad::from(*t)).collect()
    }

    #[test]
    fn test_candidate_buckets() {
        let state = sample();
        let (first, second) = state.candidate_buckets(0);
        assert_eq!(first, vec![&Triad::new(0, 2, 5)]);
        assert_eq!(second, vec![&Triad::new(1, 3, 6)]);
    }

    #[test]
    fn test_bucket_prefers_first_outer() {
        let state = DecompositionState::new(
            Graph::from_edges([(0, 1), (1, 2), (2, 0)]),
            BTreeSet::from([0, 1, 2]),
            triads(&[[0, 1, 2], [2, 0, 1]]),
        );
        let (first, second) = state.candidate_buckets(0);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_candidate_vertex_middle_match() {
        let selected = Triad::new(0, 1, 3);
        // Selected second outer (3) is the candidate middle, and the selected
        // middle (1) is the candidate first slot: take its second slot.
        let candidate = Triad::new(1, 3, 6);
        assert_eq!(
            candidate_vertex(&selected, &[&candidate], TriadSlot::Second),
            Some(6)
        );
        let candidate = Triad::new(6, 3, 1);
        assert_eq!(
            candidate_vertex(&selected, &[&candidate], TriadSlot::Second),
            Some(6)
        );
    }

    #[test]
    fn test_candidate_vertex_first_only() {
        let selected = Triad::new(0, 1, 3);
        let first = Triad::new(0, 2, 5);
        let second = Triad::new(4, 0, 1);
        assert_eq!(
            candidate_vertex(&selected, &[&first, &second], TriadSlot::First),
            Some(2)
        );
        assert_eq!(candidate_vertex(&selected, &[], TriadSlot::First), None);
    }

    #[test]
    fn test_apply_start_zero() {
        let mut state = sample();
        let selected = state.apply(0, ConsumedTriads::SharedMiddle).unwrap();

        assert_eq!(selected, Triad::new(0, 1, 3));
        assert_eq!(
            state.triads,
            triads(&[
                [1, 3, 6],
                [0, 2, 5],
                [2, 5, 9],
                [9, 8, 7],
                [8, 7, 6],
                [2, 0, 3],
                [0, 3, 6],
            ])
        );
        assert!(state.graph.has_edge(&0, &3));
        assert!(state.graph.has_edge(&3, &0));
        assert!(!state.border.contains(&1));
        assert_eq!(state.border.len(), 8);
        assert_eq!(state.triads_history, vec![Triad::new(0, 1, 3)]);
    }

    #[test]
    fn test_apply_start_one() {
        let mut state = sample();
        state.apply(1, ConsumedTriads::SharedMiddle).unwrap();

        assert_eq!(
            state.triads,
            triads(&[
                [0, 1, 3],
                [0, 2, 5],
                [2, 5, 9],
                [9, 8, 7],
                [8, 7, 6],
                [0, 1, 6],
                [1, 6, 7],
            ])
        );
        assert!(state.graph.has_edge(&1, &6));
        assert!(!state.border.contains(&3));
    }

    #[test]
    fn test_apply_any_position() {
        let mut state = sample();
        state.apply(0, ConsumedTriads::AnyPosition).unwrap();
        assert_eq!(
            state.triads,
            triads(&[
                [0, 2, 5],
                [2, 5, 9],
                [9, 8, 7],
                [8, 7, 6],
                [2, 0, 3],
                [0, 3, 6],
            ])
        );
    }

    #[test]
    fn test_apply_removes_shared_middles() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (0, 5), (2, 6), (7, 8), (8, 9)]);
        let mut state = DecompositionState::new(
            graph,
            BTreeSet::from([0, 1, 2, 5, 6, 7, 8, 9]),
            triads(&[[0, 1, 2], [0, 1, 5], [2, 1, 6], [7, 8, 9]]),
        );
        state.apply(0, ConsumedTriads::SharedMiddle).unwrap();
        assert_eq!(state.triads, triads(&[[7, 8, 9], [1, 0, 2], [0, 2, 1]]));
        assert!(state.is_terminal(3));
    }

    #[test]
    fn test_apply_failure_leaves_state() {
        let mut state = sample();
        let before = state.clone();

        // (1, 3, 6) heads the advanced list and nothing else contains 1.
        state.apply(0, ConsumedTriads::SharedMiddle).unwrap();
        let advanced = state.clone();
        assert_eq!(
            state.apply(0, ConsumedTriads::SharedMiddle),
            Err(BranchFailure::NoCandidate {
                slot: TriadSlot::First,
                triad_index: 0
            })
        );
        assert_eq!(state, advanced);

        let mut state = before;
        assert_eq!(
            state.apply(6, ConsumedTriads::SharedMiddle),
            Err(BranchFailure::TriadIndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn test_apply_rejects_equal_outers() {
        let graph = Graph::from_edges([(8, 9), (9, 7), (7, 6), (8, 6)]);
        let mut state = DecompositionState::new(
            graph,
            BTreeSet::from([6, 7, 8, 9]),
            triads(&[[9, 7, 6], [8, 9, 8], [7, 6, 8], [6, 8, 9]]),
        );
        let before = state.clone();
        assert_eq!(
            state.apply(1, ConsumedTriads::SharedMiddle),
            Err(BranchFailure::DegenerateTriad { triad_index: 1 })
        );
        assert_eq!(state, before);
        assert!(state.triads_history.is_empty());
        assert!(state.border.contains(&9));
    }

    #[test]
    fn test_validate() {
        let state = sample();
        assert_eq!(state.validate(), Ok(()));

        let mut state = sample();
        state.triads.push(Triad::new(0, 42, 1));
        assert_eq!(
            state.validate(),
            Err(InvalidGraphError::UnknownVertex { vertex: "42".into() })
        );
    }
}
