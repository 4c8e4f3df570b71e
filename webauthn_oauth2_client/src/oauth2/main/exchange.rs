use std::time::Duration;

use async_trait::async_trait;

use crate::oauth2::config::MOCK_ACCESS_TOKEN_PREFIX;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::traits::ProfileSource;
use crate::oauth2::types::{ProviderUser, TokenResponse};
use crate::utils::gen_random_string;

/// Stands in for a server-side code-for-token exchange.
///
/// Never contacts a token endpoint: a real application would hand the code
/// to its backend and receive tokens from the provider's token endpoint.
/// The short delay models that round trip.
pub(super) async fn simulate_code_exchange(code: &str) -> Result<TokenResponse, OAuth2Error> {
    tracing::debug!("Simulating token exchange for code: {}", code);
    tokio::time::sleep(Duration::from_millis(1000)).await;

    Ok(TokenResponse {
        access_token: format!("{}{}", MOCK_ACCESS_TOKEN_PREFIX, gen_random_string(36)?),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        scope: "User.Read openid profile".to_string(),
    })
}

/// Settings for the user-info HTTP client.
///
/// - `timeout`: 30 seconds so a hanging profile lookup cannot block the
///   flow indefinitely.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create reqwest client")
}

/// [`ProfileSource`] backed by the provider's user-info endpoint.
///
/// Simulated access tokens resolve to a fixed demo profile without touching
/// the network. For real tokens, any failure of the live lookup degrades to
/// a placeholder profile instead of propagating; callers observe a
/// successful sign-in with demo data. Deliberate demo behavior.
pub struct UserInfoProfileSource {
    client: reqwest::Client,
    userinfo_url: String,
}

impl UserInfoProfileSource {
    pub fn new(userinfo_url: impl Into<String>) -> Self {
        Self {
            client: get_client(),
            userinfo_url: userinfo_url.into(),
        }
    }

    async fn fetch_live(&self, access_token: &str) -> Result<ProviderUser, OAuth2Error> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| OAuth2Error::ProfileFetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OAuth2Error::ProfileFetchFailed(format!(
                "User-info endpoint returned {status}"
            )));
        }

        let response_body = response
            .text()
            .await
            .map_err(|e| OAuth2Error::ProfileFetchFailed(e.to_string()))?;

        tracing::debug!("User-info response body: {:#?}", response_body);
        let user: ProviderUser = serde_json::from_str(&response_body)
            .map_err(|e| OAuth2Error::ProfileFetchFailed(format!("Failed to deserialize: {e}")))?;

        Ok(user)
    }
}

#[async_trait]
impl ProfileSource for UserInfoProfileSource {
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderUser, OAuth2Error> {
        if access_token.starts_with(MOCK_ACCESS_TOKEN_PREFIX) {
            // Simulated token: short delay in place of the network call.
            tokio::time::sleep(Duration::from_millis(500)).await;
            return demo_profile();
        }

        match self.fetch_live(access_token).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!("Profile lookup failed, using fallback profile: {}", e);
                Ok(fallback_profile())
            }
        }
    }
}

fn demo_profile() -> Result<ProviderUser, OAuth2Error> {
    Ok(ProviderUser {
        id: format!("mock-user-id-{}", gen_random_string(8)?),
        display_name: "Demo User".to_string(),
        user_principal_name: "demo.user@contoso.com".to_string(),
        mail: Some("demo.user@contoso.com".to_string()),
        job_title: Some("Software Developer".to_string()),
        office_location: Some("Seattle, WA".to_string()),
    })
}

fn fallback_profile() -> ProviderUser {
    ProviderUser {
        id: "fallback-user-id".to_string(),
        display_name: "Demo User (Fallback)".to_string(),
        user_principal_name: "demo.user@contoso.com".to_string(),
        mail: Some("demo.user@contoso.com".to_string()),
        job_title: Some("Demo User".to_string()),
        office_location: Some("Demo Location".to_string()),
    }
}
