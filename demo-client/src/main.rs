use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webauthn_oauth2_client::{
    AuthConfig, AuthCoordinator, MemorySessionStore, PasskeyAuthOutcome, PasskeyService,
    ProviderAuthOutcome, ProviderFlow, SessionStore, UserInfoProfileSource, decode_token,
};

mod sim;

use crate::sim::{SimCeremonyDriver, SimNavigator, SimPopup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::default();
    tracing::info!(rp_id = %config.rp_id, client_id = %config.client_id, "starting demo");

    let store = MemorySessionStore::new();
    let navigator = SimNavigator::at(&config.redirect_uri);
    let profiles = UserInfoProfileSource::new(config.userinfo_endpoint.clone());

    let mut coordinator = AuthCoordinator::new(
        config,
        PasskeyService::new(Box::new(SimCeremonyDriver::default())),
        ProviderFlow::new(
            Box::new(store.clone()),
            Box::new(navigator.clone()),
            Box::new(SimPopup),
            Box::new(profiles),
        ),
    );

    tracing::info!(supported = coordinator.check_support().await, "support check");

    // 1. Register a passkey for a known account.
    let registration = coordinator.register("demo.user@example.com").await?;
    print_token("registration", &registration.token)?;

    // 2. Sign in with any discoverable passkey.
    match coordinator.sign_in_with_passkey().await? {
        PasskeyAuthOutcome::Authenticated(success) => print_token("passkey", &success.token)?,
        PasskeyAuthOutcome::FallbackToProvider { reason, detail } => {
            tracing::warn!(?reason, detail = %detail, "passkey sign-in offered a fallback");
        }
    }

    // 3. Sign in restricted to the credentials registered this session.
    match coordinator.sign_in_with_registered_passkey().await? {
        PasskeyAuthOutcome::Authenticated(success) => {
            print_token("passkey (allow-list)", &success.token)?;
        }
        PasskeyAuthOutcome::FallbackToProvider { reason, detail } => {
            tracing::warn!(?reason, detail = %detail, "allow-list sign-in offered a fallback");
        }
    }

    // 4. Provider sign-in: the simulated popup is blocked, so the flow
    //    falls back to a full-page redirect.
    match coordinator.sign_in_with_provider().await? {
        ProviderAuthOutcome::Completed(success) => print_token("provider", &success.token)?,
        ProviderAuthOutcome::RedirectStarted => {
            let auth_url = navigator
                .last_navigation()
                .expect("redirect recorded a navigation");
            tracing::info!("authorization request: {}", auth_url);

            // Play the provider's part: send the browser back with a code
            // bound to the state we were just given.
            let state = store
                .get("oauth_state")?
                .expect("state persisted for the callback");
            navigator.arrive_at(&format!(
                "https://localhost:8443/?code=demo-auth-code&state={state}"
            ));

            match coordinator.handle_redirect_callback().await? {
                Some(success) => print_token("provider (redirect)", &success.token)?,
                None => tracing::warn!("no callback in flight"),
            }
        }
    }

    if let Some(identity) = coordinator.current_user() {
        tracing::info!("session identity: {}", identity.display_name());
    }

    Ok(())
}

fn print_token(label: &str, token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = decode_token(token)?;
    tracing::info!(
        "{} token claims:\n{}",
        label,
        serde_json::to_string_pretty(&decoded.claims)?
    );
    Ok(())
}
