use thiserror::Error;

use crate::utils::UtilError;

/// Errors from the authorization-code flow.
#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    /// The interactive popup flow failed (blocked, dismissed, or no access
    /// token in the response). The caller decides whether to fall back to
    /// the redirect flow.
    #[error("Popup sign-in failed: {0}")]
    PopupFailed(String),

    /// The callback's `state` did not match the persisted value. Fatal to
    /// the in-flight flow; it must restart from idle. No token is issued.
    #[error("State parameter mismatch on callback")]
    CsrfViolation,

    /// The provider answered the authorization request with an error code.
    #[error("Provider error: {error} - {error_description}")]
    ProviderError {
        error: String,
        error_description: String,
    },

    /// The user-info lookup returned a non-success status. This never
    /// escapes the profile source, which degrades to a placeholder profile.
    #[error("Profile fetch failed: {0}")]
    ProfileFetchFailed(String),

    /// Session-scoped storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The navigation sink rejected a redirect or URL read.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// The current location could not be parsed as a callback URL.
    #[error("Invalid callback URL: {0}")]
    Callback(String),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
