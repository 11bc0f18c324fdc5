//! Rate policy lookup.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::error::PolicyError;

use super::model::PayRatePolicy;

/// Source of authoritative rate policies, keyed by region.
#[async_trait]
pub trait PolicyProvider: Send + Sync {
    /// Look up the policy for a region.
    ///
    /// Unknown regions resolve to the default policy rather than failing;
    /// `Err` means the lookup itself failed and the caller should offer a
    /// manual retry.
    async fn policy_for(&self, region: &str) -> Result<PayRatePolicy, PolicyError>;
}

/// In-memory policy directory standing in for the rates API.
///
/// Lookups take a fixed simulated latency and can be configured to fail a
/// fraction of the time. No caching, no prefetch.
pub struct StaticPolicyDirectory {
    policies: HashMap<String, PayRatePolicy>,
    latency: Duration,
    failure_rate: f64,
}

impl StaticPolicyDirectory {
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        Self {
            policies: builtin_policies(),
            latency,
            failure_rate,
        }
    }

    /// Directory with a caller-supplied policy table.
    pub fn with_policies(
        policies: HashMap<String, PayRatePolicy>,
        latency: Duration,
        failure_rate: f64,
    ) -> Self {
        Self {
            policies,
            latency,
            failure_rate,
        }
    }

    /// Directory with no latency and no injected failures.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }
}

#[async_trait]
impl PolicyProvider for StaticPolicyDirectory {
    async fn policy_for(&self, region: &str) -> Result<PayRatePolicy, PolicyError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            tracing::warn!(%region, "simulated policy lookup failure");
            return Err(PolicyError::Unavailable {
                region: region.to_string(),
            });
        }
        match self.policies.get(region) {
            Some(policy) => Ok(policy.clone()),
            None => {
                tracing::debug!(%region, "no policy for region, falling back to default");
                Ok(default_policy())
            }
        }
    }
}

/// The fallback policy applied when a region has no entry.
pub fn default_policy() -> PayRatePolicy {
    PayRatePolicy {
        region: "DEFAULT".to_string(),
        allows_custom_rates: false,
        minimum_rate: dec!(15),
        maximum_rate: dec!(80),
        suggested_rate: dec!(20),
        has_custom_rate_policy: false,
    }
}

fn builtin_policies() -> HashMap<String, PayRatePolicy> {
    let policies = [
        PayRatePolicy {
            region: "CA".to_string(),
            allows_custom_rates: true,
            minimum_rate: dec!(18),
            maximum_rate: dec!(150),
            suggested_rate: dec!(20),
            has_custom_rate_policy: true,
        },
        PayRatePolicy {
            region: "NY".to_string(),
            allows_custom_rates: true,
            minimum_rate: dec!(16),
            maximum_rate: dec!(120),
            suggested_rate: dec!(21),
            has_custom_rate_policy: true,
        },
        PayRatePolicy {
            region: "WA".to_string(),
            allows_custom_rates: false,
            minimum_rate: dec!(16),
            maximum_rate: dec!(100),
            suggested_rate: dec!(25),
            has_custom_rate_policy: false,
        },
    ];
    policies
        .into_iter()
        .map(|p| (p.region.clone(), p))
        .collect()
}
