use url::Url;

use crate::config::AuthConfig;
use crate::oauth2::config::{
    OAUTH2_NONCE_KEY, OAUTH2_PROMPT, OAUTH2_RESPONSE_MODE, OAUTH2_RESPONSE_TYPE, OAUTH2_STATE_KEY,
};
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::traits::{NavigationSink, PopupDriver, ProfileSource, SessionStore};
use crate::oauth2::types::{OAuthSession, PopupLoginRequest, ProviderUser};
use crate::utils::gen_random_string;

use super::exchange::simulate_code_exchange;

/// Drives the popup/redirect authorization-code flow for one session.
///
/// Popup path: `Idle -> AwaitingPopup -> Resolved` within a single page
/// load. Redirect path: `Idle -> Redirected`, then `AwaitingCallback ->
/// Resolved` on the next page load via [`ProviderFlow::handle_callback`].
/// The state/nonce pair in the session store is the only state crossing
/// that boundary.
pub struct ProviderFlow {
    store: Box<dyn SessionStore>,
    navigation: Box<dyn NavigationSink>,
    popup: Box<dyn PopupDriver>,
    profiles: Box<dyn ProfileSource>,
}

impl ProviderFlow {
    pub fn new(
        store: Box<dyn SessionStore>,
        navigation: Box<dyn NavigationSink>,
        popup: Box<dyn PopupDriver>,
        profiles: Box<dyn ProfileSource>,
    ) -> Self {
        Self {
            store,
            navigation,
            popup,
            profiles,
        }
    }

    /// Interactive popup sign-in with the configured scopes.
    ///
    /// Any popup failure surfaces as [`OAuth2Error::PopupFailed`]; whether
    /// to fall back to the redirect flow is the caller's decision.
    pub async fn sign_in_popup(&self, config: &AuthConfig) -> Result<ProviderUser, OAuth2Error> {
        let request = PopupLoginRequest {
            scopes: config.scopes.split_whitespace().map(String::from).collect(),
            prompt: OAUTH2_PROMPT.to_string(),
        };

        let login = match self.popup.login_popup(&request).await {
            Ok(result) => result,
            Err(OAuth2Error::PopupFailed(message)) => {
                return Err(OAuth2Error::PopupFailed(message));
            }
            Err(other) => return Err(OAuth2Error::PopupFailed(other.to_string())),
        };

        let access_token = login
            .access_token
            .ok_or_else(|| OAuth2Error::PopupFailed("No access token received".to_string()))?;

        self.profiles.fetch_profile(&access_token).await
    }

    /// Starts the redirect flow: mints and persists the state/nonce pair,
    /// then navigates to the authorization endpoint.
    ///
    /// Does not resolve on this page load; control resumes in
    /// [`ProviderFlow::handle_callback`] after the provider redirects back.
    pub async fn sign_in_redirect(&self, config: &AuthConfig) -> Result<(), OAuth2Error> {
        let session = OAuthSession {
            state: gen_random_string(32)?,
            nonce: gen_random_string(32)?,
        };

        self.store.set(OAUTH2_STATE_KEY, &session.state)?;
        self.store.set(OAUTH2_NONCE_KEY, &session.nonce)?;

        let auth_url = build_authorization_url(config, &session);
        tracing::debug!("Authorization URL: {:#?}", auth_url);

        self.navigation.navigate(&auth_url)
    }

    /// Inspects the current location for an authorization callback.
    ///
    /// Returns `Ok(None)` when no callback is in flight (the normal case on
    /// a fresh page load). The CSRF comparison runs before any exchange or
    /// profile fetch; the persisted state/nonce pair is destroyed whether
    /// validation succeeds or fails.
    pub async fn handle_callback(&self) -> Result<Option<ProviderUser>, OAuth2Error> {
        let current = self.navigation.current_url()?;
        let url = Url::parse(&current).map_err(|e| OAuth2Error::Callback(e.to_string()))?;

        let mut code = None;
        let mut state = None;
        let mut error = None;
        let mut error_description = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                "error" => error = Some(value.into_owned()),
                "error_description" => error_description = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(error) = error {
            self.clear_session()?;
            return Err(OAuth2Error::ProviderError {
                error,
                error_description: error_description.unwrap_or_default(),
            });
        }

        let (Some(code), Some(state)) = (code, state) else {
            // No callback in flight; nothing to do, nothing to touch.
            return Ok(None);
        };

        let stored_state = self.store.get(OAUTH2_STATE_KEY)?;
        if stored_state.as_deref() != Some(state.as_str()) {
            tracing::error!("State in callback: {:#?}", state);
            tracing::error!("Stored state: {:#?}", stored_state);
            self.clear_session()?;
            return Err(OAuth2Error::CsrfViolation);
        }

        let token_response = simulate_code_exchange(&code).await?;
        let user = self.profiles.fetch_profile(&token_response.access_token).await?;

        self.clear_session()?;
        self.scrub_callback_query(&url)?;

        Ok(Some(user))
    }

    fn clear_session(&self) -> Result<(), OAuth2Error> {
        self.store.remove(OAUTH2_STATE_KEY)?;
        self.store.remove(OAUTH2_NONCE_KEY)?;
        Ok(())
    }

    fn scrub_callback_query(&self, url: &Url) -> Result<(), OAuth2Error> {
        let mut clean = url.clone();
        clean.set_query(None);
        clean.set_fragment(None);
        self.navigation.replace_url(clean.as_str())
    }
}

fn build_authorization_url(config: &AuthConfig, session: &OAuthSession) -> String {
    format!(
        "{}?client_id={}&response_type={}&redirect_uri={}&response_mode={}&scope={}&state={}&nonce={}&prompt={}",
        config.authorize_endpoint,
        config.client_id,
        OAUTH2_RESPONSE_TYPE,
        urlencoding::encode(&config.redirect_uri),
        OAUTH2_RESPONSE_MODE,
        urlencoding::encode(&config.scopes),
        session.state,
        session.nonce,
        OAUTH2_PROMPT,
    )
}
