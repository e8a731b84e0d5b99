//! ST-003 lock tests: idempotence of runs and transcript digests.

use lock_tests::corpus::{collections, ODDS};
use stepwise_harness::runner::run_recorded;
use stepwise_search::{AbortSignal, RunPolicy, SearchError, StrategyId};

// ---------------------------------------------------------------------------
// ACCEPTANCE: ST3-IDEMPOTENCE-INPROC
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_produce_identical_transcripts_n10() {
    let policy = RunPolicy::default();
    for id in StrategyId::ALL {
        for target in [7, 8, 0, 15] {
            let first = run_recorded(id, &ODDS, target, &policy).unwrap();
            let first_bytes = first.to_canonical_json_bytes().unwrap();
            for _ in 1..10 {
                let other = run_recorded(id, &ODDS, target, &policy).unwrap();
                assert_eq!(first, other, "{id}/{target}: transcript differs");
                assert_eq!(
                    first_bytes,
                    other.to_canonical_json_bytes().unwrap(),
                    "{id}/{target}: canonical bytes differ"
                );
            }
        }
    }
}

#[test]
fn no_state_leaks_between_runs_over_different_collections() {
    let policy = RunPolicy::default();
    let corpus = collections(0xD1CE, 12, 12);
    for id in [StrategyId::Bfs, StrategyId::Dfs, StrategyId::HashTableSearch] {
        let baseline: Vec<_> = corpus
            .iter()
            .map(|values| run_recorded(id, values, values[0], &policy).unwrap())
            .collect();
        // Interleave with runs over other collections, then replay in reverse.
        for (values, expected) in corpus.iter().zip(&baseline).rev() {
            let _ = run_recorded(id, &ODDS, 1, &policy).unwrap();
            let again = run_recorded(id, values, values[0], &policy).unwrap();
            assert_eq!(
                again.digest().unwrap(),
                expected.digest().unwrap(),
                "{id}: run over {values:?} changed after other runs"
            );
        }
    }
}

#[test]
fn distinct_strategies_have_distinct_transcript_digests() {
    let policy = RunPolicy::default();
    let mut digests: Vec<String> = StrategyId::ALL
        .into_iter()
        .map(|id| {
            run_recorded(id, &ODDS, 7, &policy)
                .unwrap()
                .digest()
                .unwrap()
                .as_str()
                .to_string()
        })
        .collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), StrategyId::ALL.len());
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: ST3-ABORT
// ---------------------------------------------------------------------------

#[test]
fn pre_raised_abort_emits_nothing() {
    let signal = AbortSignal::new();
    signal.raise();
    let policy = RunPolicy::with_abort(signal);
    for id in StrategyId::ALL {
        let err = run_recorded(id, &ODDS, 7, &policy).unwrap_err();
        assert_eq!(err, SearchError::Aborted { steps_emitted: 0 }, "{id}");
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: ST3-CANONICAL-BYTES
// ---------------------------------------------------------------------------

#[test]
fn canonical_bytes_reparse_to_the_same_bytes() {
    let policy = RunPolicy::default();
    for id in StrategyId::ALL {
        let transcript = run_recorded(id, &[4, 2, 9, 1, 9, -3], 9, &policy).unwrap();
        let bytes = transcript.to_canonical_json_bytes().unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["strategy"], id.as_str());
        assert_eq!(parsed["outcome"]["type"], "found");
        assert_eq!(
            parsed["steps"].as_array().map(Vec::len),
            Some(transcript.steps.len())
        );
        // Sorted keys and compact separators survive a reparse unchanged.
        assert_eq!(serde_json::to_vec(&parsed).unwrap(), bytes, "{id}");
    }
}
