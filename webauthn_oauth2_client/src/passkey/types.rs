use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::{UtilError, gen_random_string};

/// A locally-created user a passkey is registered for.
///
/// `name` carries the UPN-like account identifier and `display_name` the
/// human-readable form shown in authenticator prompts.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LocalUser {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl LocalUser {
    /// Builds a local user from a UPN-like identifier.
    ///
    /// Without a UPN a throwaway demo account name is generated. The display
    /// name is the mailbox part of the UPN.
    pub fn from_upn(upn: Option<&str>) -> Result<Self, UtilError> {
        let name = match upn {
            Some(upn) => upn.to_string(),
            None => format!("demo-user-{}@example.com", gen_random_string(6)?),
        };
        let display_name = name
            .split('@')
            .next()
            .unwrap_or(name.as_str())
            .to_string();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            display_name,
        })
    }
}

/// Result of a registration ceremony.
///
/// Immutable once created; the service appends it to its in-memory registry
/// for the lifetime of the session. Binary fields hold the raw buffers the
/// authenticator returned.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PasskeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    #[serde(rename = "type")]
    pub type_: String,
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
}

/// Result of an authentication ceremony, created fresh per attempt.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PasskeyAssertion {
    pub id: String,
    pub raw_id: Vec<u8>,
    #[serde(rename = "type")]
    pub type_: String,
    pub client_data_json: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

/// How a ceremony failed, as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CeremonyFailureKind {
    /// The user dismissed the prompt or the platform refused the operation
    Cancelled,
    /// No credential usable for this relying party exists on the device
    NoCredential,
    /// The ceremony did not complete within its timeout
    Timeout,
    /// Anything else the platform reported
    Other,
}

/// Terminal failure of a single ceremony. There is no partial or resumable
/// ceremony state behind this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CeremonyFailure {
    pub kind: CeremonyFailureKind,
    pub message: String,
}

impl CeremonyFailure {
    pub fn new(kind: CeremonyFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CeremonyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            CeremonyFailureKind::Cancelled => "cancelled",
            CeremonyFailureKind::NoCredential => "no credential",
            CeremonyFailureKind::Timeout => "timeout",
            CeremonyFailureKind::Other => "other",
        };
        write!(f, "{}: {}", kind, self.message)
    }
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct RelyingParty {
    pub(super) name: String,
    pub(super) id: String,
}

/// User entity carried in creation options, per the credential ceremony contract.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PublicKeyCredentialUserEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub(super) type_: String,
    pub(super) alg: i32,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(super) struct AuthenticatorSelection {
    pub(super) authenticator_attachment: String,
    pub(super) user_verification: String,
    pub(super) require_resident_key: bool,
}

/// Options for a credential creation ceremony, in the shape the platform's
/// credential container consumes.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCreationOptions {
    pub(super) challenge: String,
    pub(super) rp: RelyingParty,
    pub(super) user: PublicKeyCredentialUserEntity,
    pub(super) pub_key_cred_params: Vec<PubKeyCredParam>,
    pub(super) authenticator_selection: AuthenticatorSelection,
    pub(super) timeout: u32,
    pub(super) attestation: String,
}

impl CredentialCreationOptions {
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    pub fn rp_id(&self) -> &str {
        &self.rp.id
    }

    pub fn user(&self) -> &PublicKeyCredentialUserEntity {
        &self.user
    }
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct AllowCredential {
    #[serde(rename = "type")]
    pub(super) type_: String,
    pub(super) id: String,
}

/// Options for an assertion ceremony. An empty allow list requests the
/// discoverable-credential flow.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequestOptions {
    pub(super) challenge: String,
    pub(super) timeout: u32,
    pub(super) rp_id: String,
    pub(super) allow_credentials: Vec<AllowCredential>,
    pub(super) user_verification: String,
}

impl CredentialRequestOptions {
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    pub fn rp_id(&self) -> &str {
        &self.rp_id
    }

    pub fn allowed_credential_ids(&self) -> Vec<&str> {
        self.allow_credentials
            .iter()
            .map(|c| c.id.as_str())
            .collect()
    }
}
