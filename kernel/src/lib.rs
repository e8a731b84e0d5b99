//! Stepwise Kernel: the observable-step model shared by every search strategy.
//!
//! # API Surface
//!
//! - [`step::Step`] -- one immutable inspection event
//! - [`step::Outcome`] -- terminal result of a run (`Found` / `NotFound`)
//! - [`observer::StepObserver`] -- the sink strategies report progress to
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 for transcripts
//!
//! # Module Dependency Direction
//!
//! `step` ← `observer` ← (search crate)
//!
//! `proof` depends on nothing internal. Nothing in the kernel knows about
//! individual strategies.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod observer;
pub mod proof;
pub mod step;
