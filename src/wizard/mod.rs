//! Onboarding wizard — step sequencing, rate entry, submission.
//!
//! The wizard drives the "set your pay rate" slice of provider
//! onboarding: a fixed step sequence behind one canonical state machine,
//! advisory validation while editing, and an authoritative submission
//! gateway behind the continue action.

pub mod manager;
pub mod routes;
pub mod state;
pub mod steps;

pub use manager::{ContinueOutcome, WizardManager, WizardStatus};
pub use routes::{WizardRouteState, wizard_routes};
pub use state::WizardState;
pub use steps::{STEPS, StepId};
