//! Run transcripts: the recorded, content-addressed form of one search run.
//!
//! A [`TranscriptV1`] holds the arrangement that step positions index into,
//! every step in emission order, and the outcome. Its canonical JSON bytes
//! (sorted keys, compact separators) are the input to its digest, so two
//! runs are identical exactly when their digests match.

use stepwise_kernel::observer::StepObserver;
use stepwise_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use stepwise_kernel::step::{Outcome, Step};
use stepwise_search::StrategyId;

/// Domain prefix for full transcript hashing.
pub const DOMAIN_STEP_TRANSCRIPT: HashDomain = HashDomain::StepTranscript;

/// Domain prefix for step-sequence-only hashing.
pub const DOMAIN_STEP_SEQUENCE: HashDomain = HashDomain::StepSequence;

/// The complete record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptV1 {
    pub strategy: StrategyId,
    pub target: i64,
    /// Arrangement searched (sorted copy for sorted strategies).
    pub values: Vec<i64>,
    /// Steps in emission order.
    pub steps: Vec<Step>,
    pub outcome: Outcome,
}

impl TranscriptV1 {
    /// Serialize to canonical JSON bytes.
    ///
    /// Every object below is built with its keys already in ascending
    /// order, so the bytes are the same whether `serde_json`'s map is the
    /// default sorted one or the `preserve_order` one (a feature any crate
    /// in the graph can switch on). `to_vec` writes the compact form.
    /// Keep new keys in sorted position.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_STEP_TRANSCRIPT, &bytes))
    }

    /// Digest of the step sequence alone.
    ///
    /// Two strategies that inspect the same positions with the same labels
    /// share this digest even though their transcripts differ.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn step_sequence_digest(&self) -> Result<ContentHash, serde_json::Error> {
        let steps = serde_json::Value::Array(self.steps.iter().map(step_to_json).collect());
        let bytes = serde_json::to_vec(&steps)?;
        Ok(canonical_hash(DOMAIN_STEP_SEQUENCE, &bytes))
    }

    /// Number of steps that carry a match. Always 0 or 1.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_match()).count()
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "outcome": outcome_to_json(self.outcome),
            "preprocessing": self.strategy.preprocessing().as_str(),
            "steps": self.steps.iter().map(step_to_json).collect::<Vec<_>>(),
            "strategy": self.strategy.as_str(),
            "target": self.target,
            "values": self.values,
        })
    }
}

fn step_to_json(step: &Step) -> serde_json::Value {
    serde_json::json!({
        "is_match": step.is_match(),
        "label": step.label(),
        "positions": step.positions(),
    })
}

fn outcome_to_json(outcome: Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Found { position } => {
            serde_json::json!({"position": position, "type": outcome.as_str()})
        }
        Outcome::NotFound => serde_json::json!({"type": outcome.as_str()}),
    }
}

/// Observer that records the prepared arrangement and every step.
#[derive(Debug, Default)]
pub struct TranscriptRecorder {
    values: Vec<i64>,
    steps: Vec<Step>,
}

impl TranscriptRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps recorded so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Close the recording with the run's outcome.
    #[must_use]
    pub fn finish(self, strategy: StrategyId, target: i64, outcome: Outcome) -> TranscriptV1 {
        TranscriptV1 {
            strategy,
            target,
            values: self.values,
            steps: self.steps,
            outcome,
        }
    }
}

impl StepObserver for TranscriptRecorder {
    fn on_prepared(&mut self, values: &[i64]) {
        self.values = values.to_vec();
    }

    fn emit(&mut self, step: Step) {
        self.steps.push(step);
    }
}
