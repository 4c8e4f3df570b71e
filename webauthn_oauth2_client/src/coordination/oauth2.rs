use super::errors::CoordinationError;
use super::{AuthCoordinator, AuthSuccess};

use crate::token::{AuthEvidence, AuthMethod, Identity, issue_token};

// Evidence attached to provider-issued tokens. The simulated flows never
// expose a real access token at issuance time, so fixed markers stand in:
// one for the popup path, one for the redirect path.
const POPUP_EVIDENCE_TOKEN: &str = "mock_token";
const REDIRECT_EVIDENCE_TOKEN: &str = "mock_redirect_token";

/// Outcome of a provider sign-in attempt on this page load.
#[derive(Clone, Debug)]
pub enum ProviderAuthOutcome {
    /// The popup path resolved; a token has been issued.
    Completed(AuthSuccess),
    /// The popup failed and a full-page redirect was started. No token is
    /// issued on this page load; completion happens through
    /// [`AuthCoordinator::handle_redirect_callback`] after navigation back.
    RedirectStarted,
}

impl AuthCoordinator {
    /// Signs in against the identity provider: popup first, redirect as the
    /// fallback when the popup fails.
    pub async fn sign_in_with_provider(
        &mut self,
    ) -> Result<ProviderAuthOutcome, CoordinationError> {
        match self.provider.sign_in_popup(&self.config).await {
            Ok(user) => {
                let success = self.complete_provider_sign_in(user, POPUP_EVIDENCE_TOKEN)?;
                Ok(ProviderAuthOutcome::Completed(success))
            }
            Err(popup_error) => {
                tracing::warn!(
                    "Popup sign-in failed, falling back to redirect: {}",
                    popup_error
                );
                self.provider.sign_in_redirect(&self.config).await?;
                Ok(ProviderAuthOutcome::RedirectStarted)
            }
        }
    }

    /// Completes a redirect flow if the current location carries a
    /// callback.
    ///
    /// Returns `Ok(None)` on a quiet page load; this is the normal case and
    /// not an error. CSRF validation happens inside the flow before any
    /// exchange or profile fetch.
    pub async fn handle_redirect_callback(
        &mut self,
    ) -> Result<Option<AuthSuccess>, CoordinationError> {
        let Some(user) = self.provider.handle_callback().await? else {
            return Ok(None);
        };

        let success = self.complete_provider_sign_in(user, REDIRECT_EVIDENCE_TOKEN)?;
        Ok(Some(success))
    }

    fn complete_provider_sign_in(
        &mut self,
        user: crate::oauth2::ProviderUser,
        evidence_token: &str,
    ) -> Result<AuthSuccess, CoordinationError> {
        let identity = Identity::Provider(user);
        let token = issue_token(
            &identity,
            AuthMethod::Provider,
            Some(&AuthEvidence::AccessToken(evidence_token.to_string())),
        )?;
        self.current_user = Some(identity.clone());

        Ok(AuthSuccess {
            identity,
            method: AuthMethod::Provider,
            token,
        })
    }
}
