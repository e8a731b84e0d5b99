//! Step observer contract.

use crate::step::Step;

/// Sink for the steps a strategy emits.
///
/// # Contract
///
/// - `emit` is called synchronously, in algorithm order, once per inspection.
///   The strategy does not proceed until `emit` returns, so an observer may
///   block (pacing a visual replay) without the strategy buffering steps.
/// - No step is emitted twice and none is skipped.
/// - `on_prepared` is called exactly once per run, before the first step,
///   with the arrangement that step positions index into.
///
/// Closures taking a [`Step`] are observers.
pub trait StepObserver {
    /// Receive the prepared arrangement for this run.
    fn on_prepared(&mut self, _values: &[i64]) {}

    /// Receive one step.
    fn emit(&mut self, step: Step);
}

impl<F> StepObserver for F
where
    F: FnMut(Step),
{
    fn emit(&mut self, step: Step) {
        self(step);
    }
}

/// Observer that discards every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn emit(&mut self, _step: Step) {}
}

/// Observer that keeps every step in emission order.
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    pub values: Vec<i64>,
    pub steps: Vec<Step>,
}

impl CollectingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for CollectingObserver {
    fn on_prepared(&mut self, values: &[i64]) {
        self.values = values.to_vec();
    }

    fn emit(&mut self, step: Step) {
        self.steps.push(step);
    }
}
