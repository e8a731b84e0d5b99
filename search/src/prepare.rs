//! Preprocessing: derived, per-run inputs for each strategy.
//!
//! Nothing here outlives a run. Every [`PreparedRun`] is built fresh from
//! the caller's collection and consumed by [`PreparedRun::execute`].

use std::collections::HashMap;

use stepwise_kernel::step::Outcome;

use crate::emitter::Emitter;
use crate::error::SearchError;
use crate::strategies::{binary, hash, interpolation, jump, linear, ternary, traversal};

/// What a strategy needs done to the collection before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preprocessing {
    /// Search the caller's arrangement as given.
    None,
    /// Search a private ascending copy.
    SortInput,
    /// Build the chain [`AdjacencyMap`] over positions.
    BuildAdjacency,
    /// Build the value → position [`HashIndex`].
    BuildHashIndex,
}

impl Preprocessing {
    /// Canonical string for serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SortInput => "sort_input",
            Self::BuildAdjacency => "build_adjacency",
            Self::BuildHashIndex => "build_hash_index",
        }
    }
}

/// Chain connectivity over positions: `i` links to `i - 1` then `i + 1`.
///
/// Neighbor lists are in adjacency order (lower position first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyMap {
    /// Build the chain for a collection of `len` positions.
    #[must_use]
    pub fn chain(len: usize) -> Self {
        let neighbors = (0..len)
            .map(|i| {
                let mut adjacent = Vec::with_capacity(2);
                if i > 0 {
                    adjacent.push(i - 1);
                }
                if i + 1 < len {
                    adjacent.push(i + 1);
                }
                adjacent
            })
            .collect();
        Self { neighbors }
    }

    /// Neighbors of `position` in adjacency order. Empty if out of range.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> &[usize] {
        self.neighbors.get(position).map_or(&[][..], Vec::as_slice)
    }

    /// Number of positions covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Direct-mapped value → position index.
///
/// Built by a single forward pass; when a value repeats, the last position
/// seen wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashIndex {
    slots: HashMap<i64, usize>,
}

impl HashIndex {
    #[must_use]
    pub fn build(values: &[i64]) -> Self {
        let mut slots = HashMap::with_capacity(values.len());
        for (position, &value) in values.iter().enumerate() {
            slots.insert(value, position);
        }
        Self { slots }
    }

    /// Position recorded for `value`.
    #[must_use]
    pub fn get(&self, value: i64) -> Option<usize> {
        self.slots.get(&value).copied()
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A strategy variant bound to the input it needs.
///
/// The eight strategies share only the step protocol, so each variant
/// carries its own prepared shape instead of one interface with unused
/// parameters.
#[derive(Debug, Clone)]
pub enum PreparedRun<'a> {
    Linear { values: &'a [i64] },
    Binary { sorted: Vec<i64> },
    Jump { sorted: Vec<i64> },
    Ternary { sorted: Vec<i64> },
    Interpolation { sorted: Vec<i64> },
    BreadthFirst {
        values: &'a [i64],
        adjacency: AdjacencyMap,
        root: usize,
    },
    DepthFirst {
        values: &'a [i64],
        adjacency: AdjacencyMap,
        root: usize,
    },
    HashTable { values: &'a [i64], index: HashIndex },
}

impl PreparedRun<'_> {
    /// The arrangement step positions index into.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        match self {
            Self::Linear { values }
            | Self::BreadthFirst { values, .. }
            | Self::DepthFirst { values, .. }
            | Self::HashTable { values, .. } => values,
            Self::Binary { sorted }
            | Self::Jump { sorted }
            | Self::Ternary { sorted }
            | Self::Interpolation { sorted } => sorted.as_slice(),
        }
    }

    /// Run the bound strategy to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Aborted`] if the emitter's abort signal is
    /// raised, or [`SearchError::InvalidInput`] if the prepared input is empty.
    pub fn execute(&self, target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
        match self {
            Self::Linear { values } => linear::search(values, target, emitter),
            Self::Binary { sorted } => binary::search(sorted, target, emitter),
            Self::Jump { sorted } => jump::search(sorted, target, emitter),
            Self::Ternary { sorted } => ternary::search(sorted, target, emitter),
            Self::Interpolation { sorted } => interpolation::search(sorted, target, emitter),
            Self::BreadthFirst {
                values,
                adjacency,
                root,
            } => traversal::breadth_first(values, adjacency, *root, target, emitter),
            Self::DepthFirst {
                values,
                adjacency,
                root,
            } => traversal::depth_first(values, adjacency, *root, target, emitter),
            Self::HashTable { values, index } => hash::search(values, index, target, emitter),
        }
    }
}

/// Private ascending copy of `values`.
#[must_use]
pub fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
