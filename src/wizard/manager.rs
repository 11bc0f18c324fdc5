//! WizardManager — coordinates step navigation, rate validation, and
//! submission.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::WizardConfig;
use crate::error::{PolicyError, ValidationError};
use crate::rates::estimate::{estimated_weekly_jobs, standard_new_client_rate};
use crate::rates::gateway::SubmissionGateway;
use crate::rates::model::{PayRatePolicy, RateDraft, RateSubmission};
use crate::rates::policy::PolicyProvider;
use crate::rates::validate::{check_custom_rate, check_rate};
use crate::session::SessionContext;

use super::state::WizardState;
use super::steps::StepId;

/// Outcome of a continue request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ContinueOutcome {
    /// Submission accepted; the wizard moved to `step`.
    Advanced { step: StepId },
    /// A step or wizard error (or an in-flight submission) blocked the
    /// request. Nothing changed.
    Blocked,
    /// The gateway rejected the submission; the wizard stays on the
    /// current step with `message` as its error.
    Rejected { message: String },
}

/// Pay-rate step data: loaded policy, draft values, advisory error.
#[derive(Debug, Clone, Default)]
struct RateStep {
    policy: Option<PayRatePolicy>,
    policy_error: Option<String>,
    draft: RateDraft,
    step_error: Option<ValidationError>,
}

impl RateStep {
    /// Recompute the advisory error from the current draft.
    fn revalidate(&mut self) {
        let Some(policy) = &self.policy else {
            self.step_error = None;
            return;
        };
        self.step_error = None;
        if let Some(rate) = self.draft.rate {
            if let Err(e) = check_rate(rate, policy) {
                self.step_error = Some(e);
                return;
            }
        }
        if let Some(custom) = self.draft.custom_new_client_rate {
            if let Err(e) = check_custom_rate(custom, policy) {
                self.step_error = Some(e);
            }
        }
    }
}

/// Snapshot of the wizard for the shell.
#[derive(Debug, Clone, Serialize)]
pub struct WizardStatus {
    pub step: StepId,
    pub title: &'static str,
    pub step_number: usize,
    pub total_steps: usize,
    pub submitting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PayRatePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_error: Option<String>,
    pub draft: RateDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_weekly_jobs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_new_client_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Coordinates the wizard: owns the navigation state and the pay-rate
/// step data, talks to the policy directory and the submission gateway.
///
/// One instance per onboarding session; all consumers go through its
/// operations rather than holding state of their own.
pub struct WizardManager {
    session: SessionContext,
    policies: Arc<dyn PolicyProvider>,
    gateway: Arc<dyn SubmissionGateway>,
    config: WizardConfig,
    state: RwLock<WizardState>,
    rate_step: RwLock<RateStep>,
    /// Set when the owning view is torn down; in-flight results are then
    /// discarded instead of applied.
    closed: AtomicBool,
}

impl WizardManager {
    pub fn new(
        session: SessionContext,
        policies: Arc<dyn PolicyProvider>,
        gateway: Arc<dyn SubmissionGateway>,
        config: WizardConfig,
    ) -> Self {
        Self {
            session,
            policies,
            gateway,
            config,
            state: RwLock::new(WizardState::default()),
            rate_step: RwLock::new(RateStep::default()),
            closed: AtomicBool::new(false),
        }
    }

    /// Load the rate policy for the session's region.
    ///
    /// On first load the draft rate is initialized to the suggested rate.
    /// A failure leaves any previously loaded policy in place and records
    /// the error message for the shell.
    pub async fn load_policy(&self) -> Result<PayRatePolicy, PolicyError> {
        let result = self.policies.policy_for(&self.session.region).await;
        if self.is_closed() {
            return result;
        }
        let mut rate_step = self.rate_step.write().await;
        match &result {
            Ok(policy) => {
                rate_step.policy_error = None;
                if rate_step.draft.rate.is_none() {
                    rate_step.draft.rate = Some(policy.suggested_rate);
                }
                rate_step.policy = Some(policy.clone());
                rate_step.revalidate();
            }
            Err(e) => {
                tracing::warn!(region = %self.session.region, "policy load failed: {e}");
                rate_step.policy_error = Some(e.to_string());
            }
        }
        result
    }

    /// Re-run the policy fetch. This is the manual retry affordance for
    /// `PolicyError::Unavailable`.
    pub async fn reload_policy(&self) -> Result<PayRatePolicy, PolicyError> {
        self.load_policy().await
    }

    /// Set the base rate. Advisory validation runs on every edit; editing
    /// also clears the wizard-level error so a rejected submission can be
    /// retried.
    pub async fn set_rate(&self, rate: Decimal) {
        {
            let mut rate_step = self.rate_step.write().await;
            rate_step.draft.rate = Some(rate);
            rate_step.revalidate();
        }
        self.state.write().await.wizard_error = None;
    }

    /// Set or clear the custom new-client rate.
    pub async fn set_custom_rate(&self, custom: Option<Decimal>) {
        {
            let mut rate_step = self.rate_step.write().await;
            rate_step.draft.custom_new_client_rate = custom;
            rate_step.revalidate();
        }
        self.state.write().await.wizard_error = None;
    }

    /// Step back one step, clearing the wizard-level error. No-op at the
    /// first step.
    pub async fn retreat(&self) -> StepId {
        self.state.write().await.retreat()
    }

    /// Try to submit the current step and advance.
    ///
    /// No-op while a step or wizard error is present, while the pay-rate
    /// step has no loaded policy or rate, or while a submission is already
    /// in flight. On success the wizard advances after the UI-feedback
    /// delay; on rejection it stays put with the message as its error.
    pub async fn request_continue(&self) -> ContinueOutcome {
        let (step_blocked, step_error) = {
            let rate_step = self.rate_step.read().await;
            (
                rate_step.policy.is_none() || rate_step.draft.rate.is_none(),
                rate_step.step_error.clone(),
            )
        };

        {
            let mut state = self.state.write().await;
            let on_pay_rate = state.current() == StepId::PayRate;
            if state.submitting
                || state.wizard_error.is_some()
                || (on_pay_rate && (step_blocked || step_error.is_some()))
            {
                return ContinueOutcome::Blocked;
            }
            state.submitting = true;
        }

        let result = self.submit_current_step().await;

        if self.is_closed() {
            tracing::debug!("wizard closed mid-submission, discarding result");
            return ContinueOutcome::Blocked;
        }

        match result {
            Ok(()) => {
                if !self.config.feedback_delay.is_zero() {
                    tokio::time::sleep(self.config.feedback_delay).await;
                }
                if self.is_closed() {
                    return ContinueOutcome::Blocked;
                }
                let mut state = self.state.write().await;
                state.submitting = false;
                let step = state.advance();
                ContinueOutcome::Advanced { step }
            }
            Err(message) => {
                let mut state = self.state.write().await;
                state.submitting = false;
                state.wizard_error = Some(message.clone());
                ContinueOutcome::Rejected { message }
            }
        }
    }

    /// Build and send the submission payload for the current step. Steps
    /// without a payload pass through.
    async fn submit_current_step(&self) -> Result<(), String> {
        let step = self.state.read().await.current();
        match step {
            StepId::PayRate => {
                let (rate, custom) = {
                    let rate_step = self.rate_step.read().await;
                    (
                        rate_step.draft.rate,
                        rate_step.draft.custom_new_client_rate,
                    )
                };
                let rate = rate.ok_or_else(|| "No rate selected".to_string())?;
                let submission = RateSubmission::new(
                    &self.session.user_id,
                    &self.session.region,
                    rate,
                    custom,
                );
                self.gateway
                    .submit(&submission)
                    .await
                    .map_err(|e| e.to_string())
            }
            _ => Ok(()),
        }
    }

    /// Snapshot the wizard for the shell.
    pub async fn status(&self) -> WizardStatus {
        let rate_step = self.rate_step.read().await.clone();
        let state = self.state.read().await.clone();
        let step = state.current();

        let standard_new_client_rate = match (&rate_step.policy, rate_step.draft.rate) {
            (Some(policy), Some(rate)) if !policy.has_custom_rate_policy => {
                Some(standard_new_client_rate(rate))
            }
            _ => None,
        };

        WizardStatus {
            step,
            title: step.title(),
            step_number: state.step_number(),
            total_steps: state.total_steps(),
            submitting: state.submitting,
            wizard_error: state.wizard_error,
            step_error: rate_step.step_error.map(|e| e.to_string()),
            policy: rate_step.policy,
            policy_error: rate_step.policy_error,
            estimated_weekly_jobs: rate_step.draft.rate.map(estimated_weekly_jobs),
            standard_new_client_rate,
            draft: rate_step.draft,
            completed_at: state.completed_at,
        }
    }

    /// Mark the wizard torn down. In-flight operations run to completion
    /// but their results are discarded, not applied.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
