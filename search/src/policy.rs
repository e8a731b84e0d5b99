//! Run policy: configuration that is not part of the algorithms themselves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SearchError;

/// Default traversal root for BFS/DFS.
pub const DEFAULT_ROOT_POSITION: usize = 0;

/// Per-run configuration.
///
/// Defaults reproduce the demonstration behavior: traversals start at
/// position 0 and runs cannot be aborted.
#[derive(Debug, Clone, Default)]
pub struct RunPolicy {
    /// Start node for breadth-first and depth-first traversal.
    pub root_position: usize,
    /// Checked before every step emission.
    pub abort: Option<AbortSignal>,
}

impl RunPolicy {
    /// Policy with an abort signal attached.
    #[must_use]
    pub fn with_abort(abort: AbortSignal) -> Self {
        Self {
            abort: Some(abort),
            ..Self::default()
        }
    }

    /// Validate the traversal root against a collection length.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::RootOutOfRange`] if `root_position >= len`.
    pub fn validate_root(&self, len: usize) -> Result<(), SearchError> {
        if self.root_position >= len {
            return Err(SearchError::RootOutOfRange {
                root: self.root_position,
                len,
            });
        }
        Ok(())
    }
}

/// Cooperative cancellation flag shared between a host and a running search.
///
/// Cloning shares the same flag. Raising it makes the next emission attempt
/// fail with [`SearchError::Aborted`]; the step in flight is never split.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the run stop before its next step.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
