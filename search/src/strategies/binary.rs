//! Binary search over an ascending collection.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;

/// Halve `[low, high]` around `mid = (low + high) / 2` until a match or an
/// empty interval. Each iteration highlights `[low, mid, high]`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(sorted: &[i64], target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(sorted)?;
    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let is_match = sorted[mid] == target;
        let step = Step::new([low, mid, high], is_match, format!("Checking index {mid}"));
        if is_match {
            return emitter.found(step, mid);
        }
        emitter.emit(step)?;

        if sorted[mid] < target {
            low = mid + 1;
        } else {
            match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            }
        }
    }
    emitter.not_found()
}
