use serde::{Deserialize, Serialize};

/// Profile of an identity-provider-sourced user, in the shape the provider's
/// user-info endpoint returns it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub id: String,
    pub display_name: String,
    pub user_principal_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
}

/// The state/nonce pair binding an authorization request to its callback.
///
/// Lives in session-scoped storage across the redirect boundary and nowhere
/// else; destroyed on the first callback that validates (or fails to).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct OAuthSession {
    pub state: String,
    pub nonce: String,
}

/// Result of the (simulated) code-for-token exchange.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub scope: String,
}

/// Parameters for an interactive popup login.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupLoginRequest {
    pub scopes: Vec<String>,
    pub prompt: String,
}

/// What the popup came back with. A missing access token is a failed login.
#[derive(Clone, Debug, Default)]
pub struct PopupLoginResult {
    pub access_token: Option<String>,
}
