//! REST endpoints for the wizard shell.
//!
//! The mobile client is a thin consumer of the manager's public state:
//! progress, continue/back controls, rate edits, and the policy retry
//! affordance all go through these routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::manager::WizardManager;

/// Shared state for wizard routes.
#[derive(Clone)]
pub struct WizardRouteState {
    pub manager: Arc<WizardManager>,
}

/// GET /api/onboarding/status
///
/// Returns the full wizard snapshot: current step and progress, the rate
/// draft with its derived figures, and any standing errors.
async fn get_status(State(state): State<WizardRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

/// POST /api/onboarding/continue
///
/// Runs the continue action and reports the outcome alongside the
/// refreshed status.
async fn post_continue(State(state): State<WizardRouteState>) -> impl IntoResponse {
    let outcome = state.manager.request_continue().await;
    let status = state.manager.status().await;
    Json(serde_json::json!({ "outcome": outcome, "status": status }))
}

/// POST /api/onboarding/back
async fn post_back(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.manager.retreat().await;
    Json(state.manager.status().await)
}

#[derive(Debug, Deserialize)]
struct RateBody {
    rate: Decimal,
}

/// PUT /api/onboarding/rate
async fn put_rate(
    State(state): State<WizardRouteState>,
    Json(body): Json<RateBody>,
) -> impl IntoResponse {
    state.manager.set_rate(body.rate).await;
    Json(state.manager.status().await)
}

#[derive(Debug, Deserialize)]
struct CustomRateBody {
    #[serde(default)]
    custom_new_client_rate: Option<Decimal>,
}

/// PUT /api/onboarding/custom-rate
///
/// Omitting the field clears the custom rate (the toggle switched off).
async fn put_custom_rate(
    State(state): State<WizardRouteState>,
    Json(body): Json<CustomRateBody>,
) -> impl IntoResponse {
    state.manager.set_custom_rate(body.custom_new_client_rate).await;
    Json(state.manager.status().await)
}

/// POST /api/onboarding/policy/reload
///
/// Manual retry for a failed policy load; 503 while the rates service is
/// unavailable.
async fn post_policy_reload(State(state): State<WizardRouteState>) -> impl IntoResponse {
    match state.manager.reload_policy().await {
        Ok(policy) => Json(serde_json::to_value(policy).unwrap_or_default()).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Build the wizard REST routes.
pub fn wizard_routes(state: WizardRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/continue", post(post_continue))
        .route("/api/onboarding/back", post(post_back))
        .route("/api/onboarding/rate", put(put_rate))
        .route("/api/onboarding/custom-rate", put(put_custom_rate))
        .route("/api/onboarding/policy/reload", post(post_policy_reload))
        .with_state(state)
}
