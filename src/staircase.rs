//! Adaptive staircase procedure for threshold estimation
//!
//! A staircase converges on a perceptual threshold by moving a stimulus
//! intensity down after correct responses and up after incorrect ones.
//! Each change of movement direction is a *reversal*; the step size shrinks
//! (or follows whatever schedule was supplied) as reversals accumulate, and
//! the procedure terminates once a reversal limit is reached.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Direction of the staircase's last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Intensity was last decreased (after a correct response).
    Down,
    /// Intensity was last increased (after an incorrect response).
    Up,
}

/// An adaptive staircase tracking a perceptual threshold estimate.
///
/// ## Step-size schedule
///
/// The step applied on each update is `step_sizes[min(reversals, len - 1)]`:
/// indexed by the reversal count so far, clamped to the final entry once
/// the schedule is exhausted.
///
/// ## Reversal counting
///
/// A reversal is counted only when the move direction changes relative to
/// the *previous* move. The direction starts unset, so the first update
/// never counts a reversal.
///
/// ## Termination
///
/// Completion (`reversals >= reversal_limit`) is checked externally via
/// [`Staircase::is_complete`]; [`Staircase::update`] itself has no guard
/// and keeps moving the value if called after completion.
///
/// ## Bounds
///
/// `current_value` is not clamped and may go negative or grow without
/// bound. Callers whose stimulus dimension has physical limits must clamp
/// on their side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staircase {
    id: Uuid,
    name: String,
    current_value: f64,
    step_sizes: Vec<f64>,
    reversal_limit: u32,
    reversals: u32,
    direction: Option<Direction>,
}

impl Staircase {
    /// Create a new staircase.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable name (e.g. "Contrast Threshold")
    /// * `initial_value` - Starting threshold estimate
    /// * `step_sizes` - Step-size schedule, indexed by reversal count
    /// * `reversal_limit` - Number of reversals at which the staircase completes
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] for an empty name,
    /// [`Error::EmptySchedule`] for an empty step-size schedule, and
    /// [`Error::InvalidReversalLimit`] for a zero reversal limit.
    pub fn new(
        name: impl Into<String>,
        initial_value: f64,
        step_sizes: Vec<f64>,
        reversal_limit: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName { entity: "staircase" });
        }
        if step_sizes.is_empty() {
            return Err(Error::EmptySchedule { name });
        }
        if reversal_limit == 0 {
            return Err(Error::InvalidReversalLimit { name });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            current_value: initial_value,
            step_sizes,
            reversal_limit,
            reversals: 0,
            direction: None,
        })
    }

    /// Get the staircase ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Get the staircase name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current threshold estimate.
    #[must_use]
    pub const fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Get the step-size schedule.
    #[must_use]
    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    /// Get the reversal limit.
    #[must_use]
    pub const fn reversal_limit(&self) -> u32 {
        self.reversal_limit
    }

    /// Get the number of reversals counted so far.
    #[must_use]
    pub const fn reversals(&self) -> u32 {
        self.reversals
    }

    /// Get the direction of the last move, if any update has happened.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Get the step size the next update will apply.
    #[must_use]
    pub fn current_step_size(&self) -> f64 {
        self.step_sizes[(self.reversals as usize).min(self.step_sizes.len() - 1)]
    }

    /// Advance the staircase with the correctness of the latest response.
    ///
    /// A correct response moves the threshold estimate down by the current
    /// step; an incorrect one moves it up. The reversal count increments
    /// when the move direction flips relative to the previous move.
    pub fn update(&mut self, correct: bool) {
        let step = self.current_step_size();
        if correct {
            self.current_value -= step;
            if self.direction == Some(Direction::Up) {
                self.reversals += 1;
            }
            self.direction = Some(Direction::Down);
        } else {
            self.current_value += step;
            if self.direction == Some(Direction::Down) {
                self.reversals += 1;
            }
            self.direction = Some(Direction::Up);
        }
        tracing::debug!(
            name = %self.name,
            correct,
            value = self.current_value,
            reversals = self.reversals,
            "staircase updated"
        );
    }

    /// Check whether the staircase has reached its reversal limit.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.reversals >= self.reversal_limit
    }
}
