//! Property-based tests for the staircase procedure and trial generation
//!
//! - Test invariants over arbitrary response sequences
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use psyphy::generate::{randomize_trial, NameTagGenerator};
use psyphy::{Condition, Experiment, Staircase};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate a valid staircase configuration
fn arb_staircase() -> impl Strategy<Value = Staircase> {
    (
        -10.0f64..10.0,
        prop::collection::vec(0.001f64..1.0, 1..5),
        1u32..10,
    )
        .prop_map(|(initial, steps, limit)| {
            Staircase::new("prop", initial, steps, limit).unwrap()
        })
}

/// Generate a response sequence
fn arb_responses() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..100)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: reversals never decrease and grow by at most 1 per update
    #[test]
    fn prop_reversals_monotone_bounded(
        mut staircase in arb_staircase(),
        responses in arb_responses()
    ) {
        let mut previous = staircase.reversals();
        for correct in responses {
            staircase.update(correct);
            let current = staircase.reversals();
            prop_assert!(current >= previous);
            prop_assert!(current - previous <= 1);
            previous = current;
        }
    }

    /// Property: the first update never counts a reversal
    #[test]
    fn prop_first_update_never_reverses(
        mut staircase in arb_staircase(),
        correct in any::<bool>()
    ) {
        staircase.update(correct);
        prop_assert_eq!(staircase.reversals(), 0);
    }

    /// Property: is_complete() holds exactly when reversals reach the limit
    #[test]
    fn prop_complete_iff_reversal_limit(
        mut staircase in arb_staircase(),
        responses in arb_responses()
    ) {
        for correct in responses {
            staircase.update(correct);
            prop_assert_eq!(
                staircase.is_complete(),
                staircase.reversals() >= staircase.reversal_limit()
            );
        }
    }

    /// Property: each update moves the value by exactly the scheduled step,
    /// indexed by the reversal count before the update (clamped to the last
    /// schedule entry)
    #[test]
    fn prop_step_magnitude_follows_schedule(
        mut staircase in arb_staircase(),
        responses in arb_responses()
    ) {
        for correct in responses {
            let schedule = staircase.step_sizes().to_vec();
            let index = (staircase.reversals() as usize).min(schedule.len() - 1);
            let before = staircase.current_value();

            staircase.update(correct);

            let delta = staircase.current_value() - before;
            let expected = if correct { -schedule[index] } else { schedule[index] };
            prop_assert!((delta - expected).abs() < 1e-9);
        }
    }

    /// Property: a randomized trial always references one of the
    /// experiment's conditions
    #[test]
    fn prop_randomized_trial_references_known_condition(
        names in prop::collection::vec("[a-z]{1,8}", 1..6),
        seed in any::<u64>()
    ) {
        let mut experiment = Experiment::new("prop").unwrap();
        for name in &names {
            experiment.add_condition(Condition::new(name.clone()).unwrap());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let trial = randomize_trial(&experiment, &NameTagGenerator, &mut rng).unwrap();
        prop_assert!(experiment.condition(trial.condition_id()).is_some());
    }
}
