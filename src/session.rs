//! User session context for the wizard.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// A provider's account profile, as returned by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Region (state) code used for policy lookups.
    pub region: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_pay_rate: Option<Decimal>,
    pub onboarding_complete: bool,
    pub currency: String,
}

/// Session state scoped to one wizard instance.
///
/// Passed to the manager at construction so the machine never reads
/// ambient global state.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
    pub region: String,
    pub currency: String,
}

impl SessionContext {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.id.clone(),
            region: profile.region.clone(),
            currency: profile.currency.clone(),
        }
    }
}

/// Source of user profiles.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn load_profile(&self) -> Result<UserProfile, SessionError>;
}

/// Fixed profile behind a simulated fetch delay, standing in for the
/// account service.
pub struct MockUserDirectory {
    latency: Duration,
}

impl MockUserDirectory {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn load_profile(&self) -> Result<UserProfile, SessionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(UserProfile {
            id: "user123".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            region: "CA".to_string(),
            city: "San Francisco".to_string(),
            current_pay_rate: Some(dec!(25)),
            onboarding_complete: false,
            currency: "$".to_string(),
        })
    }
}
