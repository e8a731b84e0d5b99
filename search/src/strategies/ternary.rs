//! Ternary search over an ascending collection.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;

/// Split `[left, right]` at `mid1 = left + (right-left)/3` and
/// `mid2 = right - (right-left)/3`, keeping the third that can hold the
/// target. A match at `mid1` wins over one at `mid2`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(sorted: &[i64], target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(sorted)?;
    let mut left = 0usize;
    let mut right = sorted.len() - 1;

    while left <= right {
        let third = (right - left) / 3;
        let mid1 = left + third;
        let mid2 = right - third;
        let hit1 = sorted[mid1] == target;
        let hit2 = sorted[mid2] == target;
        let step = Step::new(
            [left, mid1, mid2, right],
            hit1 || hit2,
            format!("Checking indices {mid1} and {mid2}"),
        );
        if hit1 {
            return emitter.found(step, mid1);
        }
        if hit2 {
            return emitter.found(step, mid2);
        }
        emitter.emit(step)?;

        if target < sorted[mid1] {
            match mid1.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            }
        } else if target > sorted[mid2] {
            left = mid2 + 1;
        } else {
            left = mid1 + 1;
            match mid2.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            }
        }
    }
    emitter.not_found()
}
