use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use webauthn_oauth2_client::{
    CeremonyDriver, CeremonyFailure, CeremonyFailureKind, CredentialCreationOptions,
    CredentialRequestOptions, NavigationSink, OAuth2Error, PasskeyAssertion, PasskeyCredential,
    PopupDriver, PopupLoginRequest, PopupLoginResult, ProfileSource, ProviderUser,
};

/// Scripted ceremony driver: fabricates deterministic credentials and
/// assertions, or fails the way a platform would.
pub struct FakeCeremonyDriver {
    supported: bool,
    fail_with: Option<CeremonyFailure>,
    credential_id: String,
}

impl FakeCeremonyDriver {
    pub fn yielding(credential_id: &str) -> Self {
        Self {
            supported: true,
            fail_with: None,
            credential_id: credential_id.to_string(),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            fail_with: None,
            credential_id: String::new(),
        }
    }

    pub fn failing(kind: CeremonyFailureKind, message: &str) -> Self {
        Self {
            supported: true,
            fail_with: Some(CeremonyFailure::new(kind, message)),
            credential_id: String::new(),
        }
    }
}

#[async_trait]
impl CeremonyDriver for FakeCeremonyDriver {
    async fn is_supported(&self) -> bool {
        self.supported
    }

    async fn create_credential(
        &self,
        _options: &CredentialCreationOptions,
    ) -> Result<PasskeyCredential, CeremonyFailure> {
        if let Some(failure) = &self.fail_with {
            return Err(failure.clone());
        }
        Ok(PasskeyCredential {
            id: self.credential_id.clone(),
            raw_id: self.credential_id.as_bytes().to_vec(),
            type_: "public-key".to_string(),
            client_data_json: b"{\"type\":\"webauthn.create\"}".to_vec(),
            attestation_object: vec![0xa3, 0x63, 0x66, 0x6d, 0x74],
        })
    }

    async fn get_assertion(
        &self,
        _options: &CredentialRequestOptions,
    ) -> Result<PasskeyAssertion, CeremonyFailure> {
        if let Some(failure) = &self.fail_with {
            return Err(failure.clone());
        }
        Ok(PasskeyAssertion {
            id: self.credential_id.clone(),
            raw_id: self.credential_id.as_bytes().to_vec(),
            type_: "public-key".to_string(),
            client_data_json: b"{\"type\":\"webauthn.get\"}".to_vec(),
            authenticator_data: vec![0x49, 0x96, 0x0d, 0xe5, 0x88, 0x0e, 0x8c, 0x68],
            signature: vec![0x30, 0x45, 0x02, 0x21],
            user_handle: None,
        })
    }
}

/// Navigation double; clones share the recorded locations.
#[derive(Clone, Default)]
pub struct FakeNavigator {
    current: Arc<Mutex<String>>,
    navigations: Arc<Mutex<Vec<String>>>,
    replacements: Arc<Mutex<Vec<String>>>,
}

impl FakeNavigator {
    pub fn at(url: &str) -> Self {
        let navigator = Self::default();
        *navigator.current.lock().unwrap() = url.to_string();
        navigator
    }

    /// Simulates the browser arriving at `url` on a new page load.
    pub fn arrive_at(&self, url: &str) {
        *self.current.lock().unwrap() = url.to_string();
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.lock().unwrap().last().cloned()
    }

    pub fn last_replacement(&self) -> Option<String> {
        self.replacements.lock().unwrap().last().cloned()
    }
}

impl NavigationSink for FakeNavigator {
    fn navigate(&self, url: &str) -> Result<(), OAuth2Error> {
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Result<String, OAuth2Error> {
        Ok(self.current.lock().unwrap().clone())
    }

    fn replace_url(&self, url: &str) -> Result<(), OAuth2Error> {
        self.replacements.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Popup double with a scripted outcome.
pub struct FakePopup {
    outcome: Result<PopupLoginResult, OAuth2Error>,
}

impl FakePopup {
    pub fn succeeding(access_token: &str) -> Self {
        Self {
            outcome: Ok(PopupLoginResult {
                access_token: Some(access_token.to_string()),
            }),
        }
    }

    pub fn blocked() -> Self {
        Self {
            outcome: Err(OAuth2Error::PopupFailed(
                "Popup window was blocked".to_string(),
            )),
        }
    }
}

#[async_trait]
impl PopupDriver for FakePopup {
    async fn login_popup(
        &self,
        _request: &PopupLoginRequest,
    ) -> Result<PopupLoginResult, OAuth2Error> {
        self.outcome.clone()
    }
}

/// Profile source returning a fixed profile and counting invocations, so
/// ordering guarantees (no fetch before CSRF validation) are assertable.
#[derive(Clone, Default)]
pub struct CountingProfileSource {
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ProfileSource for CountingProfileSource {
    async fn fetch_profile(&self, _access_token: &str) -> Result<ProviderUser, OAuth2Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(demo_provider_user())
    }
}

pub fn demo_provider_user() -> ProviderUser {
    ProviderUser {
        id: "mock-user-id-1".to_string(),
        display_name: "Demo User".to_string(),
        user_principal_name: "demo.user@contoso.com".to_string(),
        mail: Some("demo.user@contoso.com".to_string()),
        job_title: Some("Software Developer".to_string()),
        office_location: Some("Seattle, WA".to_string()),
    }
}
