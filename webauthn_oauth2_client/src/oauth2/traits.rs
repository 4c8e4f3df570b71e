use async_trait::async_trait;

use super::errors::OAuth2Error;
use super::types::{PopupLoginRequest, PopupLoginResult, ProviderUser};

/// Key-value storage scoped to the browsing session.
///
/// The only state that crosses the full-page-redirect boundary lives here.
/// Implementations use interior mutability; a clone observing the same
/// underlying map is the expected test handle.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, OAuth2Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), OAuth2Error>;
    fn remove(&self, key: &str) -> Result<(), OAuth2Error>;
}

/// Where the flow reads and writes the current location.
///
/// `navigate` performs a full navigation (control does not return to this
/// page load); `replace_url` rewrites the visible location without
/// navigating, used to scrub callback query parameters.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, url: &str) -> Result<(), OAuth2Error>;
    fn current_url(&self) -> Result<String, OAuth2Error>;
    fn replace_url(&self, url: &str) -> Result<(), OAuth2Error>;
}

/// Interactive popup login capability.
#[async_trait]
pub trait PopupDriver: Send + Sync {
    /// Opens the provider's login popup. Failures should surface as
    /// [`OAuth2Error::PopupFailed`] so callers can fall back to redirect.
    async fn login_popup(&self, request: &PopupLoginRequest)
    -> Result<PopupLoginResult, OAuth2Error>;
}

/// Resolves an access token to a user profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderUser, OAuth2Error>;
}
