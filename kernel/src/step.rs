//! `Step` and `Outcome`: the observable vocabulary of a search run.

/// Label of the terminal step emitted when a run ends without a match.
pub const LABEL_NOT_FOUND: &str = "Target not found";

/// One observable unit of algorithm progress.
///
/// Invariant: `positions` is ascending and free of duplicates. Strategies
/// that inspect coinciding bounds (e.g. `low == mid == high`) collapse to a
/// single position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    positions: Vec<usize>,
    is_match: bool,
    label: String,
}

impl Step {
    /// Build a step, normalizing `positions` into an ascending set.
    #[must_use]
    pub fn new(positions: impl Into<Vec<usize>>, is_match: bool, label: impl Into<String>) -> Self {
        let mut positions = positions.into();
        positions.sort_unstable();
        positions.dedup();
        Self {
            positions,
            is_match,
            label: label.into(),
        }
    }

    /// The terminal "nothing found" step: no highlights, no match.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(Vec::new(), false, LABEL_NOT_FOUND)
    }

    /// Positions inspected by this step, ascending.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Whether this step observed the target.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    /// Human-readable description (e.g. `"Checking index 3"`).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True for the terminal not-found step (empty highlights, no match).
    #[must_use]
    pub fn is_terminal_miss(&self) -> bool {
        self.positions.is_empty() && !self.is_match
    }
}

/// Terminal outcome of a completed run.
///
/// Positions refer to the arrangement the strategy searched, which is the
/// sorted copy for strategies that require sorted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The target was observed at `position`.
    Found { position: usize },
    /// The run completed without observing the target.
    NotFound,
}

impl Outcome {
    /// The matching position, if any.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        match self {
            Self::Found { position } => Some(position),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Canonical string tag for serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Found { .. } => "found",
            Self::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { position } => write!(f, "found at index {position}"),
            Self::NotFound => f.write_str("not found"),
        }
    }
}
