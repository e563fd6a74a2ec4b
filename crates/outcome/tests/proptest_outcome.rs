//! Property-based tests for the outcome algebra

use proptest::prelude::*;
use sextant_outcome::{Outcome, OutcomeError, partition};

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        "[a-z]{1,8}".prop_map(|m| Outcome::failure(OutcomeError::custom(m))),
    ]
}

proptest! {
    #[test]
    fn partition_is_total(outcomes in prop::collection::vec(outcome_strategy(), 0..50)) {
        let total = outcomes.len();
        let (successes, failures) = partition(outcomes);

        prop_assert_eq!(successes.len() + failures.len(), total);
    }

    #[test]
    fn partition_preserves_relative_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        // Alternate successes and failures; the failure messages carry the
        // original position so ordering is checkable on both sides.
        let outcomes: Vec<Outcome<i32>> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if i % 2 == 0 {
                    Outcome::success(v)
                } else {
                    Outcome::failure(OutcomeError::custom(i.to_string()))
                }
            })
            .collect();

        let (successes, failures) = partition(outcomes);

        let expected_successes: Vec<i32> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(_, &v)| v)
            .collect();
        prop_assert_eq!(successes, expected_successes);

        let failure_positions: Vec<usize> = failures
            .iter()
            .map(|e| e.message().parse::<usize>().unwrap())
            .collect();
        let mut sorted = failure_positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(failure_positions, sorted);
    }

    #[test]
    fn flatten_inner_success(v in any::<i32>()) {
        let nested = Outcome::success(Outcome::success(v));
        prop_assert_eq!(nested.flatten(), Outcome::success(v));
    }

    #[test]
    fn flatten_inner_failure(message in "[a-z]{1,8}") {
        let nested = Outcome::success(Outcome::<i32>::failure(OutcomeError::custom(message.clone())));
        let error = nested.flatten().into_error().unwrap();
        prop_assert_eq!(error.message(), message);
    }

    #[test]
    fn flatten_outer_failure_wins(message in "[a-z]{1,8}") {
        let nested: Outcome<Outcome<i32>> = Outcome::failure(OutcomeError::custom(message.clone()));
        let error = nested.flatten().into_error().unwrap();
        prop_assert_eq!(error.message(), message);
    }

    #[test]
    fn bind_short_circuits_on_failure(message in "[a-z]{1,8}", v in any::<i32>()) {
        let failed: Outcome<i32> = Outcome::failure(OutcomeError::custom(message.clone()));
        let chained = failed.and_then(|_| Outcome::success(v));
        prop_assert_eq!(chained.into_error().unwrap().message(), message);
    }

    #[test]
    fn map_preserves_failure_identity(message in "[a-z]{1,8}") {
        let failed: Outcome<i32> = Outcome::failure(OutcomeError::custom(message));
        let original = failed.clone();
        prop_assert_eq!(failed.map(|v| v + 1).into_error(), original.into_error());
    }
}
