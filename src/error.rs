//! Error types for the onboarding wizard.

use rust_decimal::Decimal;

/// Top-level error type for the wizard service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Client-advisory validation errors.
///
/// Recoverable by editing the input. Advisory only — the submission
/// gateway re-validates against the policy on record before committing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Rate must be between {min} and {max}")]
    OutOfBounds { min: Decimal, max: Decimal },

    #[error("Custom rates are not available in your state")]
    CustomRateNotAllowed,
}

/// Rate policy lookup errors. Recoverable via a manual reload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Failed to load rate information. Please try again.")]
    Unavailable { region: String },
}

/// Server-authoritative submission rejections.
///
/// Recoverable by editing the rate and retrying. `Unexpected` is the
/// catch-all for non-validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Rate must be at least ${min}/hour")]
    RateBelowMinimum { min: Decimal },

    #[error("Rate cannot exceed ${max}/hour")]
    RateAboveMaximum { max: Decimal },

    #[error("Custom rates are not available in your state")]
    CustomRateNotAllowed,

    #[error("New client rate must be at least ${min}/hour")]
    CustomRateBelowMinimum { min: Decimal },

    #[error("New client rate cannot exceed ${max}/hour")]
    CustomRateAboveMaximum { max: Decimal },

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// User profile lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to load user profile: {reason}")]
    ProfileUnavailable { reason: String },
}

/// Result type alias for the wizard service.
pub type Result<T> = std::result::Result<T, Error>;
