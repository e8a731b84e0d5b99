//! Jump search: fixed-size block probes, then a linear scan inside the block.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;

/// Block size for a collection of `n` values: `floor(sqrt(n))`.
#[must_use]
pub fn block_size(n: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let mut block = (n as f64).sqrt() as usize;
    // Correct the float estimate for large `n`.
    while block.saturating_mul(block) > n {
        block -= 1;
    }
    while (block + 1).saturating_mul(block + 1) <= n {
        block += 1;
    }
    block
}

/// Probe block boundaries `min(step, n) - 1` while their value is below the
/// target, highlighting `[block start, boundary]` per probe. The probe that
/// lands on a value `>= target` is not a step; the in-block scan that follows
/// emits one step per position.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(sorted: &[i64], target: i64, emitter: &mut Emitter<'_>) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(sorted)?;
    let n = sorted.len();
    let block = block_size(n);
    let mut prev = 0usize;
    let mut step = block;

    loop {
        let boundary = step.min(n) - 1;
        if sorted[boundary] >= target {
            break;
        }
        emitter.emit(Step::new(
            [prev, boundary],
            false,
            format!("Jumping to index {boundary}"),
        ))?;
        prev = step;
        step += block;
        if prev >= n {
            return emitter.not_found();
        }
    }

    super::linear::scan(sorted, prev..step.min(n), target, emitter)
}
