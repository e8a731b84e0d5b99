//! Reference observers for interactive and headless hosts.
//!
//! Pacing and logging live here, never in a strategy: a strategy only calls
//! `emit`, and whatever delay or output an observer adds happens inside that
//! call.

use std::thread;
use std::time::Duration;

use stepwise_kernel::observer::StepObserver;
use stepwise_kernel::step::Step;

/// Redraw delay used by the interactive visualizer.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Pacing configuration for [`PacedObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Time to hold each step before the strategy may continue.
    pub delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_STEP_DELAY,
        }
    }
}

/// Wraps an observer and blocks for `delay` after forwarding each step.
#[derive(Debug)]
pub struct PacedObserver<O> {
    inner: O,
    config: PacingConfig,
}

impl<O: StepObserver> PacedObserver<O> {
    #[must_use]
    pub fn new(inner: O, config: PacingConfig) -> Self {
        Self { inner, config }
    }

    #[must_use]
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: StepObserver> StepObserver for PacedObserver<O> {
    fn on_prepared(&mut self, values: &[i64]) {
        self.inner.on_prepared(values);
    }

    fn emit(&mut self, step: Step) {
        self.inner.emit(step);
        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
    }
}

/// Logs every step through the `log` facade.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    context: String,
    emitted: u64,
}

impl LoggingObserver {
    /// `context` prefixes every line (typically the strategy name).
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            emitted: 0,
        }
    }

    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl StepObserver for LoggingObserver {
    fn on_prepared(&mut self, values: &[i64]) {
        log::debug!("[{}] searching {} value(s): {values:?}", self.context, values.len());
    }

    fn emit(&mut self, step: Step) {
        if step.is_match() {
            log::info!("[{}] {} (match at {:?})", self.context, step.label(), step.positions());
        } else {
            log::info!("[{}] {} {:?}", self.context, step.label(), step.positions());
        }
        self.emitted += 1;
    }
}

/// Forwards every call to two observers, `first` then `second`.
pub struct Tee<'a> {
    first: &'a mut dyn StepObserver,
    second: &'a mut dyn StepObserver,
}

impl<'a> Tee<'a> {
    #[must_use]
    pub fn new(first: &'a mut dyn StepObserver, second: &'a mut dyn StepObserver) -> Self {
        Self { first, second }
    }
}

impl StepObserver for Tee<'_> {
    fn on_prepared(&mut self, values: &[i64]) {
        self.first.on_prepared(values);
        self.second.on_prepared(values);
    }

    fn emit(&mut self, step: Step) {
        self.first.emit(step.clone());
        self.second.emit(step);
    }
}
