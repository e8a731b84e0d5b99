//! Stepwise Harness: everything around a search run that is not the search.
//!
//! The harness records runs as canonical transcripts, paces and logs steps
//! for interactive hosts, and turns user text into collections. It does NOT
//! implement search logic; it delegates to `stepwise_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod observers;
pub mod runner;
pub mod transcript;
