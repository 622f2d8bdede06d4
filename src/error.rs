//! Error types for psyphy
//!
//! All failures are configuration or call-time mistakes: callers fix the
//! setup and retry. Nothing here is recoverable mid-procedure.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Psyphy error types
#[derive(Error, Debug)]
pub enum Error {
    /// An entity was constructed with an empty name
    #[error("{entity} requires a non-empty name")]
    EmptyName {
        /// Which entity rejected the name (e.g. "experiment", "condition")
        entity: &'static str,
    },

    /// Staircase constructed with no step sizes
    #[error("staircase '{name}' requires a non-empty step-size schedule")]
    EmptySchedule {
        /// Name of the offending staircase
        name: String,
    },

    /// Staircase constructed with a reversal limit of zero
    #[error("staircase '{name}' requires a reversal limit of at least 1")]
    InvalidReversalLimit {
        /// Name of the offending staircase
        name: String,
    },

    /// Random trial selection attempted with no conditions defined
    #[error("experiment '{name}' has no conditions to draw a trial from\nAdd at least one condition before randomizing trials")]
    EmptyConditionSet {
        /// Name of the experiment
        name: String,
    },

    /// A response was recorded on a trial that already had one
    #[error("trial {trial_id} already has a recorded response")]
    ResponseAlreadyRecorded {
        /// ID of the trial
        trial_id: Uuid,
    },
}
