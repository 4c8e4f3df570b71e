use super::errors::CoordinationError;
use super::{AuthCoordinator, AuthSuccess};

use crate::passkey::{CeremonyFailure, CeremonyFailureKind, LocalUser, PasskeyAssertion, PasskeyError};
use crate::token::{AuthEvidence, AuthMethod, Identity, issue_token};

/// Outcome of a passkey sign-in attempt.
///
/// A ceremony failure is not an error here: it becomes an explicit offer to
/// fall back to the provider flow, which the caller may take or ignore.
#[derive(Clone, Debug)]
pub enum PasskeyAuthOutcome {
    Authenticated(AuthSuccess),
    FallbackToProvider {
        reason: FallbackReason,
        detail: String,
    },
}

/// Why a passkey sign-in did not complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// No credential usable for this relying party exists on the device
    NoCredential,
    /// The user dismissed the prompt or the ceremony timed out
    Cancelled,
    /// Any other platform-reported failure
    Other,
}

fn classify(failure: &CeremonyFailure) -> FallbackReason {
    match failure.kind {
        CeremonyFailureKind::NoCredential => FallbackReason::NoCredential,
        CeremonyFailureKind::Cancelled | CeremonyFailureKind::Timeout => FallbackReason::Cancelled,
        CeremonyFailureKind::Other => FallbackReason::Other,
    }
}

impl AuthCoordinator {
    /// Signs in with any discoverable passkey for the configured relying
    /// party.
    ///
    /// On ceremony failure the coordinator offers (but does not force) the
    /// provider flow as a fallback. `UnsupportedPlatform` stays an error:
    /// there is nothing to retry.
    pub async fn sign_in_with_passkey(
        &mut self,
    ) -> Result<PasskeyAuthOutcome, CoordinationError> {
        let result = self.passkeys.authenticate(&self.config).await;
        self.passkey_outcome(result)
    }

    /// Signs in restricted to credentials registered in this session.
    pub async fn sign_in_with_registered_passkey(
        &mut self,
    ) -> Result<PasskeyAuthOutcome, CoordinationError> {
        let registered = self.passkeys.registered_credentials();
        let result = self
            .passkeys
            .authenticate_with_credentials(&self.config, &registered)
            .await;
        self.passkey_outcome(result)
    }

    /// Registers a new passkey for a UPN-identified local user and issues a
    /// registration-tagged token.
    pub async fn register(&mut self, upn: &str) -> Result<AuthSuccess, CoordinationError> {
        let upn = upn.trim();
        if upn.is_empty() {
            return Err(CoordinationError::MissingUpn.log());
        }

        // Reuse the current local user; a federated identity does not own
        // passkeys, so registration under one starts a fresh local user.
        let user = match &self.current_user {
            Some(Identity::Local(user)) => user.clone(),
            _ => LocalUser::from_upn(Some(upn))?,
        };

        let credential = self.passkeys.register(&user, &self.config).await?;
        tracing::info!(credential_id = %credential.id, "passkey registered");

        let identity = Identity::Local(user);
        let token = issue_token(&identity, AuthMethod::Registration, None)?;
        self.current_user = Some(identity.clone());

        Ok(AuthSuccess {
            identity,
            method: AuthMethod::Registration,
            token,
        })
    }

    fn passkey_outcome(
        &mut self,
        result: Result<PasskeyAssertion, PasskeyError>,
    ) -> Result<PasskeyAuthOutcome, CoordinationError> {
        match result {
            Ok(assertion) => {
                let success = self.complete_passkey_sign_in(assertion)?;
                Ok(PasskeyAuthOutcome::Authenticated(success))
            }
            Err(PasskeyError::CeremonyFailed(failure)) => {
                tracing::warn!("Passkey ceremony failed: {}", failure);
                Ok(PasskeyAuthOutcome::FallbackToProvider {
                    reason: classify(&failure),
                    detail: failure.message,
                })
            }
            Err(err) => Err(CoordinationError::from(err).log()),
        }
    }

    fn complete_passkey_sign_in(
        &mut self,
        assertion: PasskeyAssertion,
    ) -> Result<AuthSuccess, CoordinationError> {
        // Keep the local identity across repeated sign-ins; mint one only
        // when the session has none (or holds a federated identity).
        let identity = match &self.current_user {
            Some(Identity::Local(user)) => Identity::Local(user.clone()),
            _ => Identity::Local(LocalUser::from_upn(None)?),
        };

        let token = issue_token(
            &identity,
            AuthMethod::Passkey,
            Some(&AuthEvidence::Assertion(assertion)),
        )?;
        self.current_user = Some(identity.clone());

        Ok(AuthSuccess {
            identity,
            method: AuthMethod::Passkey,
            token,
        })
    }
}
