//! Trial - one stimulus presentation paired with a participant response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Trial represents a single presentation of a stimulus under a condition.
///
/// A trial references its condition by ID rather than owning it. The
/// response and reaction time are unset until [`Trial::set_response`] is
/// called, which may happen at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    id: Uuid,
    condition_id: Uuid,
    stimulus: String,
    response: Option<String>,
    reaction_time_ms: Option<f64>,
    presented_at: DateTime<Utc>,
}

impl Trial {
    /// Create a new trial for a condition with the given stimulus descriptor.
    #[must_use]
    pub fn new(condition_id: Uuid, stimulus: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            condition_id,
            stimulus: stimulus.into(),
            response: None,
            reaction_time_ms: None,
            presented_at: Utc::now(),
        }
    }

    /// Get the trial ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Get the ID of the condition this trial was drawn from.
    #[must_use]
    pub const fn condition_id(&self) -> Uuid {
        self.condition_id
    }

    /// Get the stimulus descriptor.
    #[must_use]
    pub fn stimulus(&self) -> &str {
        &self.stimulus
    }

    /// Get the recorded response, if any.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Get the recorded reaction time in milliseconds, if any.
    #[must_use]
    pub const fn reaction_time_ms(&self) -> Option<f64> {
        self.reaction_time_ms
    }

    /// Get the presentation timestamp.
    #[must_use]
    pub const fn presented_at(&self) -> DateTime<Utc> {
        self.presented_at
    }

    /// Check whether a response has been recorded.
    #[must_use]
    pub const fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Record the participant's response and reaction time.
    ///
    /// Single-write: a trial's response is recorded exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResponseAlreadyRecorded`] if a response was
    /// recorded previously.
    pub fn set_response(
        &mut self,
        response: impl Into<String>,
        reaction_time_ms: f64,
    ) -> Result<()> {
        if self.response.is_some() {
            return Err(Error::ResponseAlreadyRecorded { trial_id: self.id });
        }
        self.response = Some(response.into());
        self.reaction_time_ms = Some(reaction_time_ms);
        Ok(())
    }
}
