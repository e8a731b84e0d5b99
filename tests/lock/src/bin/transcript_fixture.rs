//! Binary that runs every strategy over fixed inputs and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `transcript_fixture`
//!
//! Output: one `strategy/target: outcome steps digest` line per run.

use lock_tests::corpus::ODDS;
use stepwise_harness::runner::run_recorded;
use stepwise_search::{RunPolicy, StrategyId};

fn main() {
    let policy = RunPolicy::default();
    let unsorted = [4, 2, 9, 1, 9, -3];

    for id in StrategyId::ALL {
        for (values, target) in [(&ODDS[..], 7), (&ODDS[..], 8), (&unsorted[..], 9)] {
            let transcript = run_recorded(id, values, target, &policy).expect("fixture run failed");
            let digest = transcript.digest().expect("transcript digest failed");
            println!(
                "{id}/{target}: outcome={} steps={} digest={}",
                transcript.outcome.as_str(),
                transcript.steps.len(),
                digest.as_str()
            );
        }
    }
}
