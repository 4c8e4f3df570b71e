mod auth;
mod register;

use crate::config::AuthConfig;

use super::errors::PasskeyError;
use super::traits::CeremonyDriver;
use super::types::{LocalUser, PasskeyAssertion, PasskeyCredential};

use auth::create_request_options;
use register::create_registration_options;

/// Mediates platform credential ceremonies for one session.
///
/// Owns the ceremony capability and the in-memory registry of credentials
/// created during this session. Never touches the network or any
/// identity-provider state.
pub struct PasskeyService {
    driver: Box<dyn CeremonyDriver>,
    registered: Vec<PasskeyCredential>,
}

impl PasskeyService {
    pub fn new(driver: Box<dyn CeremonyDriver>) -> Self {
        Self {
            driver,
            registered: Vec::new(),
        }
    }

    /// True iff the platform exposes credential-ceremony capability.
    pub async fn check_support(&self) -> bool {
        self.driver.is_supported().await
    }

    /// Runs a registration ceremony for `user` and records the credential
    /// in the session registry.
    pub async fn register(
        &mut self,
        user: &LocalUser,
        config: &AuthConfig,
    ) -> Result<PasskeyCredential, PasskeyError> {
        if !self.driver.is_supported().await {
            return Err(PasskeyError::UnsupportedPlatform);
        }

        let options = create_registration_options(user, config)?;
        let credential = self
            .driver
            .create_credential(&options)
            .await
            .map_err(PasskeyError::CeremonyFailed)?;

        tracing::info!(credential_id = %credential.id, "credential created");
        self.registered.push(credential.clone());
        Ok(credential)
    }

    /// Runs an assertion ceremony with no allow list, letting the platform
    /// offer any discoverable credential for the relying party.
    pub async fn authenticate(&self, config: &AuthConfig) -> Result<PasskeyAssertion, PasskeyError> {
        self.run_assertion(config, &[]).await
    }

    /// Runs an assertion ceremony restricted to the given credentials.
    pub async fn authenticate_with_credentials(
        &self,
        config: &AuthConfig,
        credentials: &[PasskeyCredential],
    ) -> Result<PasskeyAssertion, PasskeyError> {
        self.run_assertion(config, credentials).await
    }

    /// Defensive copy of the session registry; the live collection is never
    /// handed out.
    pub fn registered_credentials(&self) -> Vec<PasskeyCredential> {
        self.registered.clone()
    }

    async fn run_assertion(
        &self,
        config: &AuthConfig,
        allowed: &[PasskeyCredential],
    ) -> Result<PasskeyAssertion, PasskeyError> {
        if !self.driver.is_supported().await {
            return Err(PasskeyError::UnsupportedPlatform);
        }

        let options = create_request_options(config, allowed)?;
        let assertion = self
            .driver
            .get_assertion(&options)
            .await
            .map_err(PasskeyError::CeremonyFailed)?;

        tracing::debug!(assertion_id = %assertion.id, "assertion obtained");
        Ok(assertion)
    }
}
