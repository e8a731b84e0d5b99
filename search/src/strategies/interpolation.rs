//! Interpolation search over an ascending collection.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;

/// Estimate the probe position by linear interpolation between
/// `sorted[low]` and `sorted[high]`, continuing only while
/// `sorted[low] <= target <= sorted[high]`.
///
/// Equal bounds over a non-trivial interval would divide by zero; that case
/// is answered by comparing `sorted[low]` directly (the loop guard already
/// pins the target between the two equal bounds).
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(sorted: &[i64], target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(sorted)?;
    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high && sorted[low] <= target && target <= sorted[high] {
        if low == high {
            if sorted[low] == target {
                let step = Step::new([low], true, format!("Found at index {low}"));
                return emitter.found(step, low);
            }
            break;
        }

        if sorted[low] == sorted[high] {
            let is_match = sorted[low] == target;
            let step = Step::new([low, high], is_match, format!("Checking index {low}"));
            if is_match {
                return emitter.found(step, low);
            }
            emitter.emit(step)?;
            break;
        }

        let pos = probe(sorted, low, high, target);
        let is_match = sorted[pos] == target;
        let step = Step::new([low, pos, high], is_match, format!("Checking index {pos}"));
        if is_match {
            return emitter.found(step, pos);
        }
        emitter.emit(step)?;

        if sorted[pos] < target {
            low = pos + 1;
        } else {
            match pos.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            }
        }
    }
    emitter.not_found()
}

/// `low + floor((high - low) / (sorted[high] - sorted[low]) * (target - sorted[low]))`,
/// clamped into `[low, high]`. Requires `sorted[low] < sorted[high]`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn probe(sorted: &[i64], low: usize, high: usize, target: i64) -> usize {
    let span = (high - low) as f64;
    let rise = sorted[high] as f64 - sorted[low] as f64;
    let offset = (span / rise * (target as f64 - sorted[low] as f64)).floor();
    low + (offset.max(0.0) as usize).min(high - low)
}
