//! Error types for the coordination layer

use thiserror::Error;

use crate::oauth2::OAuth2Error;
use crate::passkey::PasskeyError;
use crate::token::TokenError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating authentication flows
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Registration was requested without a user principal name
    #[error("A user principal name is required for registration")]
    MissingUpn,

    /// Error from Passkey operations
    #[error("Passkey error: {0}")]
    Passkey(#[from] PasskeyError),

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2(#[from] OAuth2Error),

    /// Error from token issuance or decoding
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl CoordinationError {
    /// Log the error and return self, allowing method chaining where a
    /// failure is both surfaced and recorded.
    pub fn log(self) -> Self {
        match &self {
            Self::MissingUpn => tracing::error!("Missing user principal name"),
            Self::Passkey(err) => tracing::error!("Passkey error: {}", err),
            Self::OAuth2(err) => tracing::error!("OAuth2 error: {}", err),
            Self::Token(err) => tracing::error!("Token error: {}", err),
            Self::Utils(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}
