//! Caller-owned configuration for the authentication flows
//!
//! Defaults come from environment variables (with fixed fallbacks), but the
//! resulting [`AuthConfig`] value is owned by the caller and passed into each
//! operation, so independent coordinators can run with different settings.

use crate::oauth2::config::{
    OAUTH2_AUTHORIZE_URL, OAUTH2_CLIENT_ID, OAUTH2_REDIRECT_URI, OAUTH2_SCOPE, OAUTH2_USERINFO_URL,
};
use crate::passkey::config::PASSKEY_RP_ID;

/// Relying-party and identity-provider parameters for one authentication session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Relying-party id passkeys are scoped to (a registrable domain suffix)
    pub rp_id: String,
    /// Authorization endpoint of the identity provider
    pub authorize_endpoint: String,
    /// Application (client) id registered with the provider
    pub client_id: String,
    /// Space-separated scope list requested from the provider
    pub scopes: String,
    /// Redirect URI the provider sends the authorization code back to
    pub redirect_uri: String,
    /// User-info endpoint used for the bearer-authenticated profile lookup
    pub userinfo_endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            rp_id: PASSKEY_RP_ID.clone(),
            authorize_endpoint: OAUTH2_AUTHORIZE_URL.clone(),
            client_id: OAUTH2_CLIENT_ID.clone(),
            scopes: OAUTH2_SCOPE.clone(),
            redirect_uri: OAUTH2_REDIRECT_URI.clone(),
            userinfo_endpoint: OAUTH2_USERINFO_URL.clone(),
        }
    }
}
