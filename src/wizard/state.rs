//! Wizard position state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::steps::{STEPS, StepId};

/// Navigation state for one wizard instance.
///
/// Owned exclusively by the manager and mutated only through the
/// transition operations here. `step_index` always stays within the step
/// list; `advance` and `retreat` are no-ops at the ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    pub step_index: usize,
    /// True while a continue request's submission is in flight.
    pub submitting: bool,
    /// Failure message from the last rejected submission, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wizard_error: Option<String>,
    /// Set the first time the terminal step is reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step_index: StepId::first_actionable().index(),
            submitting: false,
            wizard_error: None,
            completed_at: None,
        }
    }
}

impl WizardState {
    /// Current step.
    pub fn current(&self) -> StepId {
        STEPS[self.step_index]
    }

    /// 1-based step number for progress display.
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }

    pub fn total_steps(&self) -> usize {
        STEPS.len()
    }

    /// Move forward one step, clearing the wizard-level error.
    /// No-op at the terminal step.
    pub fn advance(&mut self) -> StepId {
        if self.step_index + 1 < STEPS.len() {
            self.step_index += 1;
            self.wizard_error = None;
            if self.current().is_terminal() && self.completed_at.is_none() {
                self.completed_at = Some(Utc::now());
            }
        }
        self.current()
    }

    /// Move back one step, clearing the wizard-level error.
    /// No-op at the first step.
    pub fn retreat(&mut self) -> StepId {
        if self.step_index > 0 {
            self.step_index -= 1;
            self.wizard_error = None;
        }
        self.current()
    }
}
