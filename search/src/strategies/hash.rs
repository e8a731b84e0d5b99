//! Direct-mapped hash lookup: always exactly one step.

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;
use crate::prepare::HashIndex;

/// Look `target` up in `index` and emit a single step describing the result.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty collection and
/// [`SearchError::Aborted`] if the run is aborted.
pub fn search(
    values: &[i64],
    index: &HashIndex,
    target: i64,
    emitter: &mut Emitter<'_>,
) -> Result<Outcome, SearchError> {
    super::ensure_non_empty(values)?;
    match index.get(target) {
        Some(position) => {
            let step = Step::new([position], true, format!("Found at index {position}"));
            emitter.found(step, position)
        }
        None => emitter.not_found(),
    }
}
