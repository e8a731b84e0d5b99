//! Search entry points.

use stepwise_kernel::observer::StepObserver;
use stepwise_kernel::step::Outcome;

use crate::emitter::Emitter;
use crate::error::SearchError;
use crate::policy::RunPolicy;
use crate::registry::{StrategyId, StrategyRegistry};

/// Run a strategy by identifier (resolved through the
/// [`StrategyRegistry`]) with the default [`RunPolicy`].
///
/// # Errors
///
/// Returns [`SearchError::UnknownStrategy`] or [`SearchError::InvalidInput`]
/// before any step is emitted.
pub fn run(
    strategy_id: &str,
    collection: &[i64],
    target: i64,
    observer: &mut dyn StepObserver,
) -> Result<Outcome, SearchError> {
    let id = StrategyRegistry::standard().lookup(strategy_id)?.id;
    run_with_policy(id, collection, target, &RunPolicy::default(), observer)
}

/// Prepare and run one strategy to completion on the caller's thread.
///
/// The observer receives `on_prepared` with the searched arrangement, then
/// every step in order. The collection is borrowed for the whole run, so it
/// cannot change underneath the strategy.
///
/// # Errors
///
/// Pre-flight failures ([`SearchError::InvalidInput`],
/// [`SearchError::RootOutOfRange`]) are returned before the observer is
/// called. [`SearchError::Aborted`] is returned if the policy's abort signal
/// is raised mid-run.
pub fn run_with_policy(
    strategy: StrategyId,
    collection: &[i64],
    target: i64,
    policy: &RunPolicy,
    observer: &mut dyn StepObserver,
) -> Result<Outcome, SearchError> {
    let prepared = strategy.prepare(collection, policy)?;
    observer.on_prepared(prepared.values());

    let mut emitter = Emitter::new(observer, policy.abort.as_ref());
    let outcome = prepared.execute(target, &mut emitter)?;
    log::debug!(
        "{} target={target}: {outcome} after {} step(s)",
        strategy.as_str(),
        emitter.emitted()
    );
    Ok(outcome)
}
