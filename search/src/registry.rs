//! Strategy registry: identifiers, preprocessing requirements, and catalog.
//!
//! [`StrategyId::prepare`] is the dispatch table: it applies the
//! preprocessing an identifier declares and binds the result to the matching
//! [`PreparedRun`] variant. The [`StrategyRegistry`] is the descriptive
//! catalog (names, complexity notes) presented to callers.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::SearchError;
use crate::policy::RunPolicy;
use crate::prepare::{sorted_copy, AdjacencyMap, HashIndex, PreparedRun, Preprocessing};

/// Identifier of one of the eight strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrategyId {
    LinearSearch,
    BinarySearch,
    JumpSearch,
    TernarySearch,
    InterpolationSearch,
    Bfs,
    Dfs,
    HashTableSearch,
}

impl StrategyId {
    /// All identifiers in catalog order.
    pub const ALL: [StrategyId; 8] = [
        Self::LinearSearch,
        Self::BinarySearch,
        Self::JumpSearch,
        Self::TernarySearch,
        Self::InterpolationSearch,
        Self::Bfs,
        Self::Dfs,
        Self::HashTableSearch,
    ];

    /// Canonical identifier (e.g. `"LinearSearch"`, `"BFS"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinearSearch => "LinearSearch",
            Self::BinarySearch => "BinarySearch",
            Self::JumpSearch => "JumpSearch",
            Self::TernarySearch => "TernarySearch",
            Self::InterpolationSearch => "InterpolationSearch",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::HashTableSearch => "HashTableSearch",
        }
    }

    /// Human-facing name (e.g. `"Linear Search"`).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LinearSearch => "Linear Search",
            Self::BinarySearch => "Binary Search",
            Self::JumpSearch => "Jump Search",
            Self::TernarySearch => "Ternary Search",
            Self::InterpolationSearch => "Interpolation Search",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::HashTableSearch => "Hash Table Search",
        }
    }

    /// Parse a canonical identifier or a display name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s || id.display_name() == s)
    }

    /// Preprocessing this strategy requires.
    #[must_use]
    pub const fn preprocessing(self) -> Preprocessing {
        match self {
            Self::LinearSearch => Preprocessing::None,
            Self::BinarySearch
            | Self::JumpSearch
            | Self::TernarySearch
            | Self::InterpolationSearch => Preprocessing::SortInput,
            Self::Bfs | Self::Dfs => Preprocessing::BuildAdjacency,
            Self::HashTableSearch => Preprocessing::BuildHashIndex,
        }
    }

    /// Complexity summary shown next to the strategy.
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::LinearSearch => "Time Complexity: O(n)\nSimple but inefficient for large arrays.",
            Self::BinarySearch => "Time Complexity: O(log n)\nEfficient for sorted arrays.",
            Self::JumpSearch => {
                "Time Complexity: O(\u{221a}n)\nBalanced between Linear and Binary Search."
            }
            Self::TernarySearch => "Time Complexity: O(log3 n)\nDivides array into three parts.",
            Self::InterpolationSearch => {
                "Time Complexity: O(log log n) average, O(n) worst\n\
                 Efficient for uniformly distributed sorted arrays."
            }
            Self::Bfs => {
                "Time Complexity: O(V + E)\n\
                 Explores all neighbor nodes at the present depth before moving to the next level."
            }
            Self::Dfs => {
                "Time Complexity: O(V + E)\n\
                 Explores as far as possible along each branch before backtracking."
            }
            Self::HashTableSearch => {
                "Time Complexity: O(1) average, O(n) worst\n\
                 Uses a hash function to map keys to indices."
            }
        }
    }

    /// Apply this strategy's preprocessing to a fresh, run-local input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] for an empty collection and
    /// [`SearchError::RootOutOfRange`] when a traversal root is outside it.
    pub fn prepare<'a>(
        self,
        values: &'a [i64],
        policy: &RunPolicy,
    ) -> Result<PreparedRun<'a>, SearchError> {
        if values.is_empty() {
            return Err(SearchError::empty_collection());
        }
        if self.preprocessing() == Preprocessing::BuildAdjacency {
            policy.validate_root(values.len())?;
        }
        log::debug!(
            "preparing {} ({}) over {} value(s)",
            self.as_str(),
            self.preprocessing().as_str(),
            values.len()
        );

        let prepared = match self {
            Self::LinearSearch => PreparedRun::Linear { values },
            Self::BinarySearch => PreparedRun::Binary {
                sorted: sorted_copy(values),
            },
            Self::JumpSearch => PreparedRun::Jump {
                sorted: sorted_copy(values),
            },
            Self::TernarySearch => PreparedRun::Ternary {
                sorted: sorted_copy(values),
            },
            Self::InterpolationSearch => PreparedRun::Interpolation {
                sorted: sorted_copy(values),
            },
            Self::Bfs => PreparedRun::BreadthFirst {
                values,
                adjacency: AdjacencyMap::chain(values.len()),
                root: policy.root_position,
            },
            Self::Dfs => PreparedRun::DepthFirst {
                values,
                adjacency: AdjacencyMap::chain(values.len()),
                root: policy.root_position,
            },
            Self::HashTableSearch => PreparedRun::HashTable {
                values,
                index: HashIndex::build(values),
            },
        };
        Ok(prepared)
    }
}

impl FromStr for StrategyId {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SearchError::UnknownStrategy { id: s.to_string() })
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry describing one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyEntry {
    pub id: StrategyId,
    pub display_name: &'static str,
    pub preprocessing: Preprocessing,
    pub complexity: &'static str,
}

impl From<StrategyId> for StrategyEntry {
    fn from(id: StrategyId) -> Self {
        Self {
            id,
            display_name: id.display_name(),
            preprocessing: id.preprocessing(),
            complexity: id.complexity(),
        }
    }
}

/// Catalog of every registered strategy, keyed by canonical identifier.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    entries: BTreeMap<&'static str, StrategyEntry>,
}

impl StrategyRegistry {
    /// Registry holding all eight strategies.
    #[must_use]
    pub fn standard() -> Self {
        let entries = StrategyId::ALL
            .into_iter()
            .map(|id| (id.as_str(), StrategyEntry::from(id)))
            .collect();
        Self { entries }
    }

    /// Resolve an identifier: canonical key first, then display name.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] if nothing matches.
    pub fn lookup(&self, id: &str) -> Result<&StrategyEntry, SearchError> {
        self.entries
            .get(id)
            .or_else(|| self.entries.values().find(|e| e.display_name == id))
            .ok_or_else(|| SearchError::UnknownStrategy { id: id.to_string() })
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &StrategyEntry> {
        StrategyId::ALL
            .into_iter()
            .filter_map(|id| self.entries.get(id.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
