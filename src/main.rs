use std::sync::Arc;

use provider_onboarding::config::WizardConfig;
use provider_onboarding::rates::policy::PolicyProvider;
use provider_onboarding::rates::{MockSubmissionService, StaticPolicyDirectory};
use provider_onboarding::session::{MockUserDirectory, SessionContext, UserDirectory};
use provider_onboarding::wizard::{WizardManager, WizardRouteState, wizard_routes};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let port: u16 = std::env::var("ONBOARD_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let config = WizardConfig::from_env();

    eprintln!("🧭 Provider Onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Status API: http://0.0.0.0:{port}/api/onboarding/status");

    // Load the session user (mock account service, fixed delay)
    let users = MockUserDirectory::new(config.profile_latency);
    let profile = users.load_profile().await?;
    let session = SessionContext::from_profile(&profile);
    eprintln!("   User: {} ({})", profile.name, session.region);

    let policies: Arc<dyn PolicyProvider> = Arc::new(StaticPolicyDirectory::new(
        config.policy_latency,
        config.policy_failure_rate,
    ));
    let gateway = Arc::new(MockSubmissionService::new(
        Arc::clone(&policies),
        config.submit_latency,
    ));

    let manager = Arc::new(WizardManager::new(session, policies, gateway, config));

    // Warm the policy before serving; a failure here surfaces through the
    // status payload and the reload route.
    if let Err(e) = manager.load_policy().await {
        tracing::warn!("initial policy load failed: {e}");
    }

    let app = wizard_routes(WizardRouteState {
        manager: Arc::clone(&manager),
    })
    .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "wizard server started");
    axum::serve(listener, app).await?;
    Ok(())
}
