use std::{env, sync::LazyLock};

pub(crate) static OAUTH2_AUTHORIZE_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_AUTHORIZE_URL").unwrap_or_else(|_| {
        "https://login.microsoftonline.com/common/oauth2/v2.0/authorize".to_string()
    })
});

pub(crate) static OAUTH2_CLIENT_ID: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_CLIENT_ID")
        .unwrap_or_else(|_| "248d6bfd-1218-4f1b-9c97-da2cab62b0f2".to_string())
});

pub(crate) static OAUTH2_SCOPE: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_SCOPE").unwrap_or_else(|_| "openid profile User.Read".to_string())
});

pub(crate) static OAUTH2_REDIRECT_URI: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_REDIRECT_URI").unwrap_or_else(|_| "https://localhost:8443/".to_string())
});

pub(crate) static OAUTH2_USERINFO_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_USERINFO_URL")
        .unwrap_or_else(|_| "https://graph.microsoft.com/v1.0/me".to_string())
});

// Session-store keys the state/nonce pair lives under between the
// authorization redirect and its callback. Single-use: consumed by exactly
// one callback page load.
pub(crate) const OAUTH2_STATE_KEY: &str = "oauth_state";
pub(crate) const OAUTH2_NONCE_KEY: &str = "oauth_nonce";

pub(super) const OAUTH2_RESPONSE_TYPE: &str = "code";
pub(super) const OAUTH2_RESPONSE_MODE: &str = "query";
pub(super) const OAUTH2_PROMPT: &str = "select_account";

/// Access tokens minted by the simulated code exchange carry this prefix;
/// the profile source recognizes it and skips the live lookup.
pub(crate) const MOCK_ACCESS_TOKEN_PREFIX: &str = "mock_access_token_";
