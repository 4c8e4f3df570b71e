//! Simulated platform capabilities for the demo run.
//!
//! These stand in for the browser: a ceremony driver that fabricates
//! credentials, a navigator that records where it was sent, and a popup
//! that can be scripted to fail so the redirect path gets exercised.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use webauthn_oauth2_client::{
    CeremonyDriver, CeremonyFailure, CredentialCreationOptions, CredentialRequestOptions,
    NavigationSink, OAuth2Error, PasskeyAssertion, PasskeyCredential, PopupDriver,
    PopupLoginRequest, PopupLoginResult,
};

/// Fabricates ceremony results the way a cooperating authenticator would.
#[derive(Default)]
pub struct SimCeremonyDriver {
    counter: AtomicUsize,
    last_credential: Mutex<Option<String>>,
}

#[async_trait]
impl CeremonyDriver for SimCeremonyDriver {
    async fn is_supported(&self) -> bool {
        true
    }

    async fn create_credential(
        &self,
        options: &CredentialCreationOptions,
    ) -> Result<PasskeyCredential, CeremonyFailure> {
        let id = format!("sim-cred-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        tracing::info!(
            rp_id = options.rp_id(),
            user = %options.user().name,
            credential_id = %id,
            "simulated registration ceremony"
        );
        *self.last_credential.lock().unwrap() = Some(id.clone());
        Ok(PasskeyCredential {
            raw_id: id.as_bytes().to_vec(),
            id,
            type_: "public-key".to_string(),
            client_data_json: b"{\"type\":\"webauthn.create\"}".to_vec(),
            attestation_object: vec![0xa3, 0x63, 0x66, 0x6d, 0x74],
        })
    }

    async fn get_assertion(
        &self,
        options: &CredentialRequestOptions,
    ) -> Result<PasskeyAssertion, CeremonyFailure> {
        let allowed = options.allowed_credential_ids();
        tracing::info!(
            rp_id = options.rp_id(),
            allow_list_len = allowed.len(),
            "simulated assertion ceremony"
        );
        let id = self
            .last_credential
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "sim-cred-0".to_string());
        Ok(PasskeyAssertion {
            raw_id: id.as_bytes().to_vec(),
            id,
            type_: "public-key".to_string(),
            client_data_json: b"{\"type\":\"webauthn.get\"}".to_vec(),
            authenticator_data: vec![0x49, 0x96, 0x0d, 0xe5, 0x88, 0x0e, 0x8c, 0x68],
            signature: vec![0x30, 0x45, 0x02, 0x21],
            user_handle: None,
        })
    }
}

/// Records navigations instead of performing them; the demo feeds the
/// callback URL back in by hand.
#[derive(Clone, Default)]
pub struct SimNavigator {
    current: Arc<Mutex<String>>,
    navigations: Arc<Mutex<Vec<String>>>,
}

impl SimNavigator {
    pub fn at(url: &str) -> Self {
        let navigator = Self::default();
        *navigator.current.lock().unwrap() = url.to_string();
        navigator
    }

    pub fn arrive_at(&self, url: &str) {
        *self.current.lock().unwrap() = url.to_string();
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.lock().unwrap().last().cloned()
    }
}

impl NavigationSink for SimNavigator {
    fn navigate(&self, url: &str) -> Result<(), OAuth2Error> {
        tracing::info!("navigating to {}", url);
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Result<String, OAuth2Error> {
        Ok(self.current.lock().unwrap().clone())
    }

    fn replace_url(&self, url: &str) -> Result<(), OAuth2Error> {
        tracing::info!("scrubbing location to {}", url);
        *self.current.lock().unwrap() = url.to_string();
        Ok(())
    }
}

/// Popup scripted to be blocked, forcing the redirect fallback.
pub struct SimPopup;

#[async_trait]
impl PopupDriver for SimPopup {
    async fn login_popup(
        &self,
        request: &PopupLoginRequest,
    ) -> Result<PopupLoginResult, OAuth2Error> {
        tracing::info!(scopes = ?request.scopes, "popup requested; simulating a blocker");
        Err(OAuth2Error::PopupFailed(
            "Popup window was blocked".to_string(),
        ))
    }
}
