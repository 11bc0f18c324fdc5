//! Integration tests for the wizard REST shell.
//!
//! Each test spins up an Axum server on a random port with zero-latency
//! mock services and drives the real REST contract with reqwest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use provider_onboarding::config::WizardConfig;
use provider_onboarding::error::SubmissionError;
use provider_onboarding::rates::model::RateSubmission;
use provider_onboarding::rates::policy::PolicyProvider;
use provider_onboarding::rates::{MockSubmissionService, StaticPolicyDirectory, SubmissionGateway};
use provider_onboarding::session::SessionContext;
use provider_onboarding::wizard::{WizardManager, WizardRouteState, wizard_routes};

/// Gateway stub simulating a submissions backend outage.
struct OfflineGateway;

#[async_trait]
impl SubmissionGateway for OfflineGateway {
    async fn submit(&self, _submission: &RateSubmission) -> Result<(), SubmissionError> {
        Err(SubmissionError::Unexpected(
            "submissions backend offline".to_string(),
        ))
    }
}

/// Start a wizard server on a random port, returning the port.
async fn start_server_with(
    region: &str,
    policies: Arc<dyn PolicyProvider>,
    gateway: Arc<dyn SubmissionGateway>,
    preload_policy: bool,
) -> u16 {
    let session = SessionContext {
        user_id: "user123".to_string(),
        region: region.to_string(),
        currency: "$".to_string(),
    };
    let manager = Arc::new(WizardManager::new(
        session,
        policies,
        gateway,
        WizardConfig::immediate(),
    ));
    if preload_policy {
        manager.load_policy().await.expect("policy preload");
    } else {
        manager.load_policy().await.ok();
    }

    let app = wizard_routes(WizardRouteState { manager });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

/// Server with the standard mock services for `region`.
async fn start_server(region: &str) -> u16 {
    let policies: Arc<dyn PolicyProvider> = Arc::new(StaticPolicyDirectory::immediate());
    let gateway = Arc::new(MockSubmissionService::new(
        Arc::clone(&policies),
        Duration::ZERO,
    ));
    start_server_with(region, policies, gateway, true).await
}

fn url(port: u16, path: &str) -> String {
    format!("http://127.0.0.1:{port}{path}")
}

async fn get_json(client: &reqwest::Client, port: u16, path: &str) -> Value {
    client
        .get(url(port, path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn status_reflects_the_initial_pay_rate_step() {
    let port = start_server("CA").await;
    let client = reqwest::Client::new();

    let status = get_json(&client, port, "/api/onboarding/status").await;
    assert_eq!(status["step"], "pay-rate");
    assert_eq!(status["title"], "Set your hourly rate");
    assert_eq!(status["step_number"], 2);
    assert_eq!(status["total_steps"], 7);
    assert_eq!(status["submitting"], false);
    // Draft seeded with the suggested rate; estimate derived from it.
    assert_eq!(status["draft"]["rate"], "20");
    assert_eq!(status["estimated_weekly_jobs"], 4);
    assert_eq!(status["policy"]["minimum_rate"], "18");
    assert_eq!(status["policy"]["maximum_rate"], "150");
    assert!(status.get("step_error").is_none());
    assert!(status.get("wizard_error").is_none());
}

#[tokio::test]
async fn out_of_bounds_rate_reports_error_and_blocks_continue() {
    let port = start_server("CA").await;
    let client = reqwest::Client::new();

    let status: Value = client
        .put(url(port, "/api/onboarding/rate"))
        .json(&json!({ "rate": 10 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["step_error"], "Rate must be between 18 and 150");

    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "blocked");
    assert_eq!(body["status"]["step"], "pay-rate");
}

#[tokio::test]
async fn valid_rate_advances_and_back_retreats() {
    let port = start_server("CA").await;
    let client = reqwest::Client::new();

    let status: Value = client
        .put(url(port, "/api/onboarding/rate"))
        .json(&json!({ "rate": 100 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(status.get("step_error").is_none());
    assert_eq!(status["estimated_weekly_jobs"], 2);

    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "advanced");
    assert_eq!(body["outcome"]["step"], "background-check");
    assert_eq!(body["status"]["submitting"], false);

    // Back to pay-rate, then welcome, then clamped at the first step.
    let status: Value = client
        .post(url(port, "/api/onboarding/back"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["step"], "pay-rate");

    let status: Value = client
        .post(url(port, "/api/onboarding/back"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["step"], "welcome");

    let status: Value = client
        .post(url(port, "/api/onboarding/back"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["step"], "welcome");
}

#[tokio::test]
async fn rejected_submission_surfaces_error_until_edited() {
    let policies: Arc<dyn PolicyProvider> = Arc::new(StaticPolicyDirectory::immediate());
    let port = start_server_with("CA", policies, Arc::new(OfflineGateway), true).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "rejected");
    let message = body["outcome"]["message"].as_str().unwrap();
    assert!(message.contains("submissions backend offline"));
    assert_eq!(body["status"]["step"], "pay-rate");
    assert_eq!(body["status"]["wizard_error"].as_str().unwrap(), message);

    // The standing error blocks the next attempt.
    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "blocked");

    // Editing the rate clears it.
    let status: Value = client
        .put(url(port, "/api/onboarding/rate"))
        .json(&json!({ "rate": 25 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(status.get("wizard_error").is_none());
}

#[tokio::test]
async fn custom_rate_in_wa_is_flagged_before_submission() {
    let port = start_server("WA").await;
    let client = reqwest::Client::new();

    let status: Value = client
        .put(url(port, "/api/onboarding/custom-rate"))
        .json(&json!({ "custom_new_client_rate": 30 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        status["step_error"],
        "Custom rates are not available in your state"
    );

    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "blocked");

    // Clearing the custom rate unblocks the step.
    let status: Value = client
        .put(url(port, "/api/onboarding/custom-rate"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(status.get("step_error").is_none());

    let body: Value = client
        .post(url(port, "/api/onboarding/continue"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["outcome"]["result"], "advanced");
}

#[tokio::test]
async fn unknown_region_gets_the_default_policy() {
    let port = start_server("ZZ").await;
    let client = reqwest::Client::new();

    let status = get_json(&client, port, "/api/onboarding/status").await;
    assert_eq!(status["policy"]["region"], "DEFAULT");
    assert_eq!(status["policy"]["minimum_rate"], "15");
    assert_eq!(status["policy"]["maximum_rate"], "80");
    assert_eq!(status["draft"]["rate"], "20");
}

#[tokio::test]
async fn policy_outage_returns_503_on_reload() {
    let policies: Arc<dyn PolicyProvider> =
        Arc::new(StaticPolicyDirectory::new(Duration::ZERO, 1.0));
    let gateway = Arc::new(MockSubmissionService::new(
        Arc::clone(&policies),
        Duration::ZERO,
    ));
    let port = start_server_with("CA", policies, gateway, false).await;
    let client = reqwest::Client::new();

    let status = get_json(&client, port, "/api/onboarding/status").await;
    assert_eq!(
        status["policy_error"],
        "Failed to load rate information. Please try again."
    );
    assert!(status.get("policy").is_none());

    let resp = client
        .post(url(port, "/api/onboarding/policy/reload"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Failed to load rate information. Please try again."
    );
}

#[tokio::test]
async fn policy_reload_returns_the_policy_when_available() {
    let port = start_server("NY").await;
    let client = reqwest::Client::new();

    let resp = client
        .post(url(port, "/api/onboarding/policy/reload"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let policy: Value = resp.json().await.unwrap();
    assert_eq!(policy["region"], "NY");
    assert_eq!(policy["suggested_rate"], "21");
}
