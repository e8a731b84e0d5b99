//! Harness runner: runs a strategy and returns its transcript.
//!
//! # Pipeline
//!
//! ```text
//! parse text (optional) → StrategyRegistry::lookup → run_with_policy()
//!   → TranscriptRecorder (+ caller observer) → TranscriptV1
//! ```

use stepwise_kernel::observer::{NullObserver, StepObserver};
use stepwise_search::{run_with_policy, RunPolicy, SearchError, StrategyId, StrategyRegistry};

use crate::input::{parse_collection, parse_target, InputError};
use crate::observers::Tee;
use crate::transcript::{TranscriptRecorder, TranscriptV1};

/// Error during a text-driven run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The collection or target text was rejected.
    Input(InputError),
    /// The engine rejected or aborted the run.
    Search(SearchError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input rejected: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<InputError> for RunError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Run `strategy` and record its transcript.
///
/// # Errors
///
/// Propagates every [`SearchError`] from the engine.
pub fn run_recorded(
    strategy: StrategyId,
    values: &[i64],
    target: i64,
    policy: &RunPolicy,
) -> Result<TranscriptV1, SearchError> {
    run_recorded_with(strategy, values, target, policy, &mut NullObserver)
}

/// Run `strategy`, recording its transcript while also feeding `observer`
/// (e.g. a [`PacedObserver`](crate::observers::PacedObserver) driving a
/// renderer).
///
/// # Errors
///
/// Propagates every [`SearchError`] from the engine.
pub fn run_recorded_with(
    strategy: StrategyId,
    values: &[i64],
    target: i64,
    policy: &RunPolicy,
    observer: &mut dyn StepObserver,
) -> Result<TranscriptV1, SearchError> {
    let mut recorder = TranscriptRecorder::new();
    let outcome = {
        let mut tee = Tee::new(&mut recorder, observer);
        run_with_policy(strategy, values, target, policy, &mut tee)?
    };
    Ok(recorder.finish(strategy, target, outcome))
}

/// Parse user text and run the named strategy.
///
/// `strategy` accepts canonical identifiers and display names. The strategy
/// is resolved before the text is parsed, so an unknown strategy is reported
/// even when the text is also malformed.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an unknown strategy or engine failure and
/// [`RunError::Input`] for unparseable text.
pub fn run_text(
    strategy: &str,
    collection_text: &str,
    target_text: &str,
    policy: &RunPolicy,
) -> Result<TranscriptV1, RunError> {
    let id = StrategyRegistry::standard().lookup(strategy)?.id;
    let values = parse_collection(collection_text)?;
    let target = parse_target(target_text)?;
    log::debug!("text run: {id} over {} value(s), target {target}", values.len());
    Ok(run_recorded(id, &values, target, policy)?)
}
