//! Experiment - root entity owning conditions, trials, and staircases

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::staircase::Staircase;
use crate::trial::Trial;

/// Experiment is the root entity of the model.
///
/// It owns three insertion-ordered collections: the conditions a trial can
/// be drawn from, the trials that have been run, and the staircases being
/// driven. Sub-entities hold no back-reference to the experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    id: Uuid,
    name: String,
    conditions: Vec<Condition>,
    trials: Vec<Trial>,
    staircases: Vec<Staircase>,
}

impl Experiment {
    /// Create a new empty experiment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName { entity: "experiment" });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            conditions: Vec::new(),
            trials: Vec::new(),
            staircases: Vec::new(),
        })
    }

    /// Get the experiment ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a condition.
    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Append a trial.
    pub fn add_trial(&mut self, trial: Trial) {
        self.trials.push(trial);
    }

    /// Append a staircase.
    pub fn add_staircase(&mut self, staircase: Staircase) {
        self.staircases.push(staircase);
    }

    /// Get all conditions, in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Get all trials, in insertion order.
    #[must_use]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Get all staircases, in insertion order.
    #[must_use]
    pub fn staircases(&self) -> &[Staircase] {
        &self.staircases
    }

    /// Get mutable access to the staircases, so a driving loop can call
    /// [`Staircase::update`] on them.
    pub fn staircases_mut(&mut self) -> &mut [Staircase] {
        &mut self.staircases
    }

    /// Look up a condition by ID.
    #[must_use]
    pub fn condition(&self, condition_id: Uuid) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id() == condition_id)
    }

    /// Get the number of trials run so far.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }
}
