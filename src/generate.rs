//! Trial generation - random condition selection and stimulus construction

use rand::Rng;

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::experiment::Experiment;
use crate::trial::Trial;

/// Pluggable stimulus construction.
///
/// Turning a condition into a concrete stimulus descriptor is inherently
/// domain-specific (gratings, tones, words, ...), so it is an extension
/// point: a pure function from condition to descriptor with no other
/// contract.
pub trait StimulusGenerator {
    /// Build a stimulus descriptor for the given condition.
    fn generate(&self, condition: &Condition) -> String;
}

/// Placeholder generator that tags the stimulus with the condition name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameTagGenerator;

impl StimulusGenerator for NameTagGenerator {
    fn generate(&self, condition: &Condition) -> String {
        format!("Stimuli for {}", condition.name())
    }
}

/// Draw a new trial from a uniformly random condition of the experiment.
///
/// The RNG is injected so trial sequences are reproducible under a seeded
/// generator. The returned trial references the picked condition by ID; it
/// is not appended to the experiment, that is the caller's decision.
///
/// # Errors
///
/// Returns [`Error::EmptyConditionSet`] if the experiment has no conditions.
pub fn randomize_trial<R: Rng + ?Sized>(
    experiment: &Experiment,
    generator: &impl StimulusGenerator,
    rng: &mut R,
) -> Result<Trial> {
    let conditions = experiment.conditions();
    if conditions.is_empty() {
        return Err(Error::EmptyConditionSet {
            name: experiment.name().to_string(),
        });
    }

    let condition = &conditions[rng.gen_range(0..conditions.len())];
    tracing::debug!(
        experiment = %experiment.name(),
        condition = %condition.name(),
        "condition selected for trial"
    );

    Ok(Trial::new(condition.id(), generator.generate(condition)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_trial_requires_conditions() {
        let experiment = Experiment::new("Empty").unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let err = randomize_trial(&experiment, &NameTagGenerator, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyConditionSet { .. }));
    }

    #[test]
    fn test_single_condition_always_selected() {
        let mut experiment = Experiment::new("E").unwrap();
        let condition = Condition::new("Only").unwrap();
        let id = condition.id();
        experiment.add_condition(condition);

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let trial = randomize_trial(&experiment, &NameTagGenerator, &mut rng).unwrap();
            assert_eq!(trial.condition_id(), id);
        }
    }

    #[test]
    fn test_name_tag_generator_matches_source_placeholder() {
        let condition = Condition::new("High Contrast").unwrap();
        assert_eq!(
            NameTagGenerator.generate(&condition),
            "Stimuli for High Contrast"
        );
    }

    #[test]
    fn test_custom_generator_sees_condition_variables() {
        struct GratingGenerator;

        impl StimulusGenerator for GratingGenerator {
            fn generate(&self, condition: &Condition) -> String {
                let contrast = condition
                    .variable("contrast")
                    .and_then(crate::condition::Value::as_number)
                    .unwrap_or_default();
                format!("grating contrast={contrast}")
            }
        }

        let mut experiment = Experiment::new("E").unwrap();
        experiment.add_condition(Condition::new("C").unwrap().with_variable("contrast", 0.8));

        let mut rng = StdRng::seed_from_u64(2);
        let trial = randomize_trial(&experiment, &GratingGenerator, &mut rng).unwrap();
        assert_eq!(trial.stimulus(), "grating contrast=0.8");
    }

    #[test]
    fn test_seeded_rng_reproduces_selection() {
        let mut experiment = Experiment::new("E").unwrap();
        for name in ["A", "B", "C", "D"] {
            experiment.add_condition(Condition::new(name).unwrap());
        }

        let pick = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| {
                    randomize_trial(&experiment, &NameTagGenerator, &mut rng)
                        .unwrap()
                        .condition_id()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(pick(42), pick(42));
    }
}
