use async_trait::async_trait;

use super::types::{
    CeremonyFailure, CredentialCreationOptions, CredentialRequestOptions, PasskeyAssertion,
    PasskeyCredential,
};

/// Capability interface over the platform's public-key-credential container.
///
/// Implementations mediate the interactive ceremonies; they are the only
/// place user/device verification happens. Ceremony failures (cancellation,
/// timeout, missing credential) surface as [`CeremonyFailure`] so the caller
/// can classify them without parsing platform-specific messages.
#[async_trait]
pub trait CeremonyDriver: Send + Sync {
    /// True iff the platform can run credential ceremonies. Side-effect-free.
    async fn is_supported(&self) -> bool;

    /// Runs a registration ceremony and returns the created credential.
    async fn create_credential(
        &self,
        options: &CredentialCreationOptions,
    ) -> Result<PasskeyCredential, CeremonyFailure>;

    /// Runs an assertion ceremony against the given request options.
    async fn get_assertion(
        &self,
        options: &CredentialRequestOptions,
    ) -> Result<PasskeyAssertion, CeremonyFailure>;
}
