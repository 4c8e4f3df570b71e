//! Authentication coordination module
//!
//! The top-level policy layer: picks a method, drives the passkey service
//! and the provider flow (which never talk to each other), decides fallback
//! at explicit tagged decision points, and hands authenticated identities to
//! the token issuer. Holds the session's current identity.

mod errors;
mod oauth2;
mod passkey;

pub use errors::CoordinationError;
pub use oauth2::ProviderAuthOutcome;
pub use passkey::{FallbackReason, PasskeyAuthOutcome};

use crate::config::AuthConfig;
use crate::oauth2::ProviderFlow;
use crate::passkey::{PasskeyCredential, PasskeyService};
use crate::token::{AuthMethod, Identity};

/// A completed authentication: the identity, how it authenticated, and the
/// issued mock token.
#[derive(Clone, Debug)]
pub struct AuthSuccess {
    pub identity: Identity,
    pub method: AuthMethod,
    pub token: String,
}

/// Coordinates method selection and fallback for one session.
///
/// Operations take `&mut self`: one coordinator never runs two ceremonies or
/// exchanges concurrently, which the platform credential interface does not
/// guarantee to serialize.
pub struct AuthCoordinator {
    config: AuthConfig,
    passkeys: PasskeyService,
    provider: ProviderFlow,
    current_user: Option<Identity>,
}

impl AuthCoordinator {
    pub fn new(config: AuthConfig, passkeys: PasskeyService, provider: ProviderFlow) -> Self {
        Self {
            config,
            passkeys,
            provider,
            current_user: None,
        }
    }

    /// Reports whether the platform can run credential ceremonies. No state
    /// change.
    pub async fn check_support(&self) -> bool {
        self.passkeys.check_support().await
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// The identity authenticated in this session, if any.
    pub fn current_user(&self) -> Option<&Identity> {
        self.current_user.as_ref()
    }

    /// Credentials registered during this session (defensive copy).
    pub fn registered_credentials(&self) -> Vec<PasskeyCredential> {
        self.passkeys.registered_credentials()
    }
}
