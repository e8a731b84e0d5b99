//! Proof module: content addressing for recorded runs.
//!
//! Depends on nothing internal. Harness transcripts route every digest
//! through [`hash::canonical_hash`].

pub mod hash;
pub mod hash_domain;
