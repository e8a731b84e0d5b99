//! The eight search strategies.
//!
//! Each strategy is a free function over already-prepared input that reports
//! every inspection through an [`Emitter`](crate::emitter::Emitter) and ends
//! with either a matching step or the terminal not-found step.

pub mod binary;
pub mod hash;
pub mod interpolation;
pub mod jump;
pub mod linear;
pub mod ternary;
pub mod traversal;

use crate::error::SearchError;

/// Reject empty input before any step is emitted.
pub(crate) fn ensure_non_empty(values: &[i64]) -> Result<(), SearchError> {
    if values.is_empty() {
        return Err(SearchError::empty_collection());
    }
    Ok(())
}
