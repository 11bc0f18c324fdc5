//! Configuration types.

use std::time::Duration;

/// Wizard service configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Delay between a successful submission and advancing to the next step.
    pub feedback_delay: Duration,
    /// Simulated latency for policy lookups.
    pub policy_latency: Duration,
    /// Simulated processing latency for submissions.
    pub submit_latency: Duration,
    /// Probability in `[0, 1]` that a policy lookup fails.
    pub policy_failure_rate: f64,
    /// Simulated latency for user profile loads.
    pub profile_latency: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_millis(1000),
            policy_latency: Duration::from_millis(300),
            submit_latency: Duration::from_millis(800),
            policy_failure_rate: 0.0,
            profile_latency: Duration::from_millis(1000),
        }
    }
}

impl WizardConfig {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = env_millis("ONBOARD_FEEDBACK_DELAY_MS") {
            config.feedback_delay = ms;
        }
        if let Some(ms) = env_millis("ONBOARD_POLICY_LATENCY_MS") {
            config.policy_latency = ms;
        }
        if let Some(ms) = env_millis("ONBOARD_SUBMIT_LATENCY_MS") {
            config.submit_latency = ms;
        }
        if let Some(ms) = env_millis("ONBOARD_PROFILE_LATENCY_MS") {
            config.profile_latency = ms;
        }
        if let Ok(rate) = std::env::var("ONBOARD_POLICY_FAILURE_RATE") {
            config.policy_failure_rate = rate.parse().unwrap_or(0.0);
        }
        config
    }

    /// Zero-latency configuration for tests.
    pub fn immediate() -> Self {
        Self {
            feedback_delay: Duration::ZERO,
            policy_latency: Duration::ZERO,
            submit_latency: Duration::ZERO,
            policy_failure_rate: 0.0,
            profile_latency: Duration::ZERO,
        }
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_mock_service_timings() {
        let config = WizardConfig::default();
        assert_eq!(config.feedback_delay, Duration::from_millis(1000));
        assert_eq!(config.policy_latency, Duration::from_millis(300));
        assert_eq!(config.submit_latency, Duration::from_millis(800));
        assert_eq!(config.policy_failure_rate, 0.0);
    }

    #[test]
    fn immediate_has_no_delays() {
        let config = WizardConfig::immediate();
        assert!(config.feedback_delay.is_zero());
        assert!(config.policy_latency.is_zero());
        assert!(config.submit_latency.is_zero());
        assert!(config.profile_latency.is_zero());
    }
}
