//! Pay rate data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-defined rate bounds and suggested value for one region.
///
/// Immutable once returned by the policy directory; never persisted
/// client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRatePolicy {
    /// Region (state) code this policy applies to.
    pub region: String,
    /// Whether providers may set a separate new-client rate.
    pub allows_custom_rates: bool,
    pub minimum_rate: Decimal,
    pub maximum_rate: Decimal,
    pub suggested_rate: Decimal,
    /// Whether the region has a custom-rate policy to surface in the UI.
    pub has_custom_rate_policy: bool,
}

/// The rate values being edited on the pay-rate step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_new_client_rate: Option<Decimal>,
}

/// A completed pay-rate submission, as posted to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSubmission {
    pub id: Uuid,
    pub user_id: String,
    pub region: String,
    pub rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_new_client_rate: Option<Decimal>,
}

impl RateSubmission {
    pub fn new(
        user_id: &str,
        region: &str,
        rate: Decimal,
        custom_new_client_rate: Option<Decimal>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            region: region.to_string(),
            rate,
            custom_new_client_rate,
        }
    }
}
