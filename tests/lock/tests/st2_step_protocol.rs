//! ST-002 lock tests: step-protocol properties over a generated corpus.
//!
//! For every strategy, collection and probe target:
//! - the run terminates with a finite step sequence;
//! - exactly one step matches iff the outcome is `Found`, and it is the last;
//! - a `NotFound` run ends on the terminal not-found step;
//! - every highlighted position is in range;
//! - the reported outcome agrees with membership.

use lock_tests::corpus::{collections, targets};
use stepwise_kernel::observer::CollectingObserver;
use stepwise_kernel::step::Outcome;
use stepwise_search::{run_with_policy, Preprocessing, RunPolicy, StrategyId};

const SEED: u64 = 0x5EED_0001;

#[test]
fn every_run_ends_in_exactly_one_terminal_step() {
    for values in collections(SEED, 60, 24) {
        for target in targets(&values) {
            for id in StrategyId::ALL {
                let mut observer = CollectingObserver::new();
                let outcome =
                    run_with_policy(id, &values, target, &RunPolicy::default(), &mut observer)
                        .unwrap();
                let steps = &observer.steps;
                let context = format!("{id} {values:?} target {target}");

                assert!(!steps.is_empty(), "{context}: no steps");
                let matches = steps.iter().filter(|s| s.is_match()).count();
                let last = steps.last().unwrap();
                match outcome {
                    Outcome::Found { position } => {
                        assert_eq!(matches, 1, "{context}: match count");
                        assert!(last.is_match(), "{context}: match must be last");
                        assert!(last.positions().contains(&position), "{context}");
                        assert_eq!(observer.values[position], target, "{context}");
                    }
                    Outcome::NotFound => {
                        assert_eq!(matches, 0, "{context}: stray match");
                        assert!(last.is_terminal_miss(), "{context}: terminal step");
                        let terminals = steps.iter().filter(|s| s.is_terminal_miss()).count();
                        assert_eq!(terminals, 1, "{context}: one terminal step");
                    }
                }

                for step in steps {
                    assert!(
                        step.positions().iter().all(|&p| p < values.len()),
                        "{context}: position out of range in {step:?}"
                    );
                    assert!(
                        step.positions().windows(2).all(|w| w[0] < w[1]),
                        "{context}: positions not an ascending set"
                    );
                }

                assert_eq!(
                    outcome.is_found(),
                    values.contains(&target),
                    "{context}: membership disagreement"
                );
            }
        }
    }
}

#[test]
fn sorted_strategies_see_sorted_copy_and_input_is_untouched() {
    for values in collections(SEED ^ 0xFF, 30, 16) {
        let before = values.clone();
        for id in StrategyId::ALL {
            let mut observer = CollectingObserver::new();
            run_with_policy(id, &values, 0, &RunPolicy::default(), &mut observer).unwrap();
            if id.preprocessing() == Preprocessing::SortInput {
                assert!(observer.values.windows(2).all(|w| w[0] <= w[1]), "{id}");
            } else {
                assert_eq!(observer.values, values, "{id} must search the input order");
            }
        }
        assert_eq!(values, before);
    }
}

#[test]
fn hash_search_always_one_step() {
    for values in collections(SEED ^ 0xAB, 30, 20) {
        for target in targets(&values) {
            let mut observer = CollectingObserver::new();
            run_with_policy(
                StrategyId::HashTableSearch,
                &values,
                target,
                &RunPolicy::default(),
                &mut observer,
            )
            .unwrap();
            assert_eq!(observer.steps.len(), 1);
        }
    }
}

#[test]
fn traversals_visit_each_position_at_most_once() {
    for values in collections(SEED ^ 0x77, 30, 20) {
        for id in [StrategyId::Bfs, StrategyId::Dfs] {
            let mut observer = CollectingObserver::new();
            run_with_policy(id, &values, i64::MAX, &RunPolicy::default(), &mut observer)
                .unwrap();
            let mut visited: Vec<usize> = observer
                .steps
                .iter()
                .filter(|s| !s.is_terminal_miss())
                .map(|s| s.positions()[0])
                .collect();
            assert_eq!(visited.len(), values.len(), "{id} must visit everything on a miss");
            visited.sort_unstable();
            visited.dedup();
            assert_eq!(visited.len(), values.len(), "{id} revisited a node");
        }
    }
}
