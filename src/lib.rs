//! # Psyphy: Psychophysics Experiment Modelling
//!
//! Psyphy models a psychophysics experiment: named **conditions**, randomly
//! drawn **trials**, and adaptive **staircases** that converge on a
//! perceptual threshold by stepping a stimulus intensity up and down based
//! on response correctness.
//!
//! ## Schema Overview
//!
//! ```text
//! Experiment (1) ──< Condition (N)
//!      │
//!      ├──< Trial (N)      [references a Condition by ID]
//!      └──< Staircase (N)  [adaptive threshold procedure]
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use psyphy::generate::{randomize_trial, NameTagGenerator};
//! use psyphy::{Condition, Experiment, Staircase};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // Assemble the experiment
//! let mut experiment = Experiment::new("Visual Perception Study")?;
//! experiment.add_condition(Condition::new("High Contrast")?.with_variable("contrast", 0.8));
//! experiment.add_condition(Condition::new("Low Contrast")?.with_variable("contrast", 0.2));
//! experiment.add_staircase(Staircase::new(
//!     "Contrast Threshold",
//!     0.5,
//!     vec![0.1, 0.05, 0.025],
//!     10,
//! )?);
//!
//! // Draw a trial and record the response
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut trial = randomize_trial(&experiment, &NameTagGenerator, &mut rng)?;
//! trial.set_response("Correct", 812.0)?;
//! experiment.add_trial(trial);
//!
//! // Drive the staircase with the response correctness
//! for staircase in experiment.staircases_mut() {
//!     staircase.update(true);
//! }
//! # Ok::<(), psyphy::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod condition;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod staircase;
pub mod trial;

pub use condition::{Condition, Value};
pub use error::{Error, Result};
pub use experiment::Experiment;
pub use staircase::{Direction, Staircase};
pub use trial::Trial;
