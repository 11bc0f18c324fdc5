//! Pay rate domain — policies, validation, estimates, submission.

pub mod estimate;
pub mod gateway;
pub mod model;
pub mod policy;
pub mod validate;

pub use gateway::{MockSubmissionService, SubmissionGateway};
pub use model::{PayRatePolicy, RateDraft, RateSubmission};
pub use policy::{PolicyProvider, StaticPolicyDirectory, default_policy};
