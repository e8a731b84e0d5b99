//! Linear scan in position order.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;

/// Inspect positions `0..n` in order, stopping at the first match.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(values: &[i64], target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(values)?;
    scan(values, 0..values.len(), target, emitter)
}

/// Linear scan over `range`, shared with jump search's in-block phase.
pub(crate) fn scan(
    values: &[i64],
    range: std::ops::Range<usize>,
    target: i64,
    emitter: &mut Emitter<'_>,
) -> Result<Outcome, SearchError> {
    for i in range {
        let is_match = values[i] == target;
        let step = Step::new([i], is_match, format!("Checking index {i}"));
        if is_match {
            return emitter.found(step, i);
        }
        emitter.emit(step)?;
    }
    emitter.not_found()
}
