//! Visual Perception Study Example
//!
//! Demonstrates the full experiment flow: conditions, a contrast-threshold
//! staircase, randomized trials with simulated responses, and staircase
//! completion.
//!
//! Run with: cargo run --example visual_perception

use psyphy::generate::{randomize_trial, NameTagGenerator};
use psyphy::{Condition, Experiment, Staircase};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() -> psyphy::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Psyphy Visual Perception Study ===\n");

    // -------------------------------------------------------------------------
    // 1. Create the experiment with its conditions
    // -------------------------------------------------------------------------
    println!("1. Creating experiment...");

    let mut experiment = Experiment::new("Visual Perception Study")?;
    experiment.add_condition(Condition::new("High Contrast")?.with_variable("contrast", 0.8));
    experiment.add_condition(Condition::new("Low Contrast")?.with_variable("contrast", 0.2));

    println!("   Experiment ID: {}", experiment.id());
    println!("   Conditions: {}", experiment.conditions().len());

    // -------------------------------------------------------------------------
    // 2. Add a contrast-threshold staircase
    // -------------------------------------------------------------------------
    println!("\n2. Adding staircase...");

    let staircase = Staircase::new("Contrast Threshold", 0.5, vec![0.1, 0.05, 0.025], 10)?;
    println!("   Staircase: {}", staircase.name());
    println!("   Initial value: {}", staircase.current_value());
    println!("   Reversal limit: {}", staircase.reversal_limit());
    experiment.add_staircase(staircase);

    // -------------------------------------------------------------------------
    // 3. Run up to 50 randomized trials with simulated responses
    // -------------------------------------------------------------------------
    println!("\n3. Running trials...");

    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let mut trial = randomize_trial(&experiment, &NameTagGenerator, &mut rng)?;

        // Simulate presenting the stimulus and collecting a response
        let correct = rng.gen_bool(0.5);
        let reaction_time_ms = rng.gen_range(500.0..1500.0);
        let response = if correct { "Correct" } else { "Incorrect" };
        trial.set_response(response, reaction_time_ms)?;
        experiment.add_trial(trial);

        let staircase = &mut experiment.staircases_mut()[0];
        staircase.update(correct);

        if staircase.is_complete() {
            println!(
                "   Staircase complete. Final value: {:.4}",
                staircase.current_value()
            );
            break;
        }
    }

    println!(
        "\nExperiment complete. Total trials: {}",
        experiment.trial_count()
    );
    Ok(())
}
