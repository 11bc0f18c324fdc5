//! Pay rate submission gateway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SubmissionError;

use super::model::RateSubmission;
use super::policy::PolicyProvider;
use super::validate::check_submission;

/// Accepts or rejects completed pay-rate submissions.
///
/// Validation here is authoritative: the advisory client checks are
/// repeated against the policy on record before anything is committed.
/// Atomic pass/fail — there is no partial-success state.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: &RateSubmission) -> Result<(), SubmissionError>;
}

/// Gateway standing in for the submissions API.
///
/// Re-fetches the authoritative policy for the submission's region (same
/// unknown-region fallback as the lookup path), re-validates, and
/// "persists" by logging the accepted submission.
pub struct MockSubmissionService {
    policies: Arc<dyn PolicyProvider>,
    latency: Duration,
}

impl MockSubmissionService {
    pub fn new(policies: Arc<dyn PolicyProvider>, latency: Duration) -> Self {
        Self { policies, latency }
    }
}

#[async_trait]
impl SubmissionGateway for MockSubmissionService {
    async fn submit(&self, submission: &RateSubmission) -> Result<(), SubmissionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let policy = self
            .policies
            .policy_for(&submission.region)
            .await
            .map_err(|e| SubmissionError::Unexpected(e.to_string()))?;

        check_submission(submission, &policy)?;

        tracing::info!(
            submission_id = %submission.id,
            user_id = %submission.user_id,
            region = %submission.region,
            rate = %submission.rate,
            "pay rate submitted"
        );
        Ok(())
    }
}
