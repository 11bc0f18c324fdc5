//! Rate validation — advisory on edit, authoritative at submission.

use rust_decimal::Decimal;

use crate::error::{SubmissionError, ValidationError};

use super::model::{PayRatePolicy, RateSubmission};

/// Advisory bounds check run on every edit of the base rate.
pub fn check_rate(rate: Decimal, policy: &PayRatePolicy) -> Result<(), ValidationError> {
    if rate < policy.minimum_rate || rate > policy.maximum_rate {
        return Err(ValidationError::OutOfBounds {
            min: policy.minimum_rate,
            max: policy.maximum_rate,
        });
    }
    Ok(())
}

/// Advisory check for the custom new-client rate.
pub fn check_custom_rate(custom: Decimal, policy: &PayRatePolicy) -> Result<(), ValidationError> {
    if !policy.allows_custom_rates {
        return Err(ValidationError::CustomRateNotAllowed);
    }
    check_rate(custom, policy)
}

/// Authoritative validation run by the submission gateway.
///
/// Check order matches the backend: base rate bounds, then custom-rate
/// eligibility, then custom rate bounds. Custom-rate checks only apply
/// when a custom rate is present.
pub fn check_submission(
    submission: &RateSubmission,
    policy: &PayRatePolicy,
) -> Result<(), SubmissionError> {
    if submission.rate < policy.minimum_rate {
        return Err(SubmissionError::RateBelowMinimum {
            min: policy.minimum_rate,
        });
    }
    if submission.rate > policy.maximum_rate {
        return Err(SubmissionError::RateAboveMaximum {
            max: policy.maximum_rate,
        });
    }
    if let Some(custom) = submission.custom_new_client_rate {
        if !policy.allows_custom_rates {
            return Err(SubmissionError::CustomRateNotAllowed);
        }
        if custom < policy.minimum_rate {
            return Err(SubmissionError::CustomRateBelowMinimum {
                min: policy.minimum_rate,
            });
        }
        if custom > policy.maximum_rate {
            return Err(SubmissionError::CustomRateAboveMaximum {
                max: policy.maximum_rate,
            });
        }
    }
    Ok(())
}
