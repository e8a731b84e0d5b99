//! Typed search errors.
//!
//! Every variant except [`SearchError::Aborted`] is a pre-flight failure:
//! it is returned before the observer sees `on_prepared` or any step.
//! Degenerate interpolation bounds are not an error; the interpolation
//! strategy guards them with a direct comparison.

/// Typed failure for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The collection violates a precondition (e.g. it is empty).
    InvalidInput { detail: String },
    /// The strategy identifier is not registered.
    UnknownStrategy { id: String },
    /// The traversal root is not a position of the collection.
    RootOutOfRange { root: usize, len: usize },
    /// The abort signal was raised between two steps.
    Aborted { steps_emitted: u64 },
}

impl SearchError {
    pub(crate) fn empty_collection() -> Self {
        Self::InvalidInput {
            detail: "collection must contain at least one value".into(),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { detail } => write!(f, "invalid input: {detail}"),
            Self::UnknownStrategy { id } => write!(f, "unknown strategy: {id:?}"),
            Self::RootOutOfRange { root, len } => {
                write!(f, "traversal root {root} is outside a collection of length {len}")
            }
            Self::Aborted { steps_emitted } => {
                write!(f, "run aborted after {steps_emitted} step(s)")
            }
        }
    }
}

impl std::error::Error for SearchError {}
