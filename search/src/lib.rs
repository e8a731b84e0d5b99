//! Stepwise Search: eight classical search procedures with an observable
//! step protocol.
//!
//! This crate depends only on `stepwise_kernel`. It does NOT depend on
//! `stepwise_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! stepwise_kernel  ←  stepwise_search  ←  stepwise_harness
//! (step, observer)    (strategies,        (transcripts, pacing,
//!                      registry)           input parsing)
//! ```
//!
//! # Key types
//!
//! - [`StrategyId`] -- the eight strategy identifiers and their preprocessing
//! - [`PreparedRun`] -- one strategy variant bound to its prepared input
//! - [`RunPolicy`] -- traversal root and abort signal
//! - [`Emitter`] -- forwards steps to a [`stepwise_kernel::observer::StepObserver`]
//! - [`run`] / [`run_with_policy`] -- the invocation surface

#![forbid(unsafe_code)]

pub mod emitter;
pub mod error;
pub mod policy;
pub mod prepare;
pub mod registry;
pub mod search;
pub mod strategies;

pub use emitter::Emitter;
pub use error::SearchError;
pub use policy::{AbortSignal, RunPolicy};
pub use prepare::{AdjacencyMap, HashIndex, PreparedRun, Preprocessing};
pub use registry::{StrategyEntry, StrategyId, StrategyRegistry};
pub use search::{run, run_with_policy};
