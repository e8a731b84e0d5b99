//! Step emission on behalf of a strategy.

use stepwise_kernel::observer::StepObserver;
use stepwise_kernel::step::{Outcome, Step};

use crate::error::SearchError;
use crate::policy::AbortSignal;

/// Forwards steps to an observer, one at a time, in algorithm order.
///
/// The abort signal (if any) is checked before each emission, so a raised
/// signal stops the strategy between two inspections.
pub struct Emitter<'a> {
    observer: &'a mut dyn StepObserver,
    abort: Option<&'a AbortSignal>,
    emitted: u64,
}

impl<'a> Emitter<'a> {
    #[must_use]
    pub fn new(observer: &'a mut dyn StepObserver, abort: Option<&'a AbortSignal>) -> Self {
        Self {
            observer,
            abort,
            emitted: 0,
        }
    }

    /// Emit one step. Returns only after the observer has returned.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Aborted`] if the abort signal is raised.
    pub fn emit(&mut self, step: Step) -> Result<(), SearchError> {
        if self.abort.is_some_and(AbortSignal::is_raised) {
            log::debug!("abort observed after {} step(s)", self.emitted);
            return Err(SearchError::Aborted {
                steps_emitted: self.emitted,
            });
        }
        log::trace!(
            "step {}: {:?} match={} {:?}",
            self.emitted,
            step.positions(),
            step.is_match(),
            step.label()
        );
        self.observer.emit(step);
        self.emitted += 1;
        Ok(())
    }

    /// Emit a matching step and report `Found(position)`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Aborted`] if the abort signal is raised.
    pub fn found(&mut self, step: Step, position: usize) -> Result<Outcome, SearchError> {
        debug_assert!(step.is_match() && step.positions().contains(&position));
        self.emit(step)?;
        Ok(Outcome::Found { position })
    }

    /// Emit the terminal not-found step and report `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Aborted`] if the abort signal is raised.
    pub fn not_found(&mut self) -> Result<Outcome, SearchError> {
        self.emit(Step::not_found())?;
        Ok(Outcome::NotFound)
    }

    /// Steps emitted so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}
