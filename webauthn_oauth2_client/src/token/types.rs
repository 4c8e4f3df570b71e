use serde::{Deserialize, Serialize};

use super::errors::TokenError;
use crate::oauth2::ProviderUser;
use crate::passkey::{LocalUser, PasskeyAssertion};

/// The authenticated identity a token is derived from. Exactly one variant
/// is active per session, never both.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Local(LocalUser),
    Provider(ProviderUser),
}

impl Identity {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Local(user) => &user.display_name,
            Self::Provider(user) => &user.display_name,
        }
    }

    /// The `sub` claim: the account name for local identities, the
    /// provider's user id for federated ones.
    pub fn subject(&self) -> &str {
        match self {
            Self::Local(user) => &user.name,
            Self::Provider(user) => &user.id,
        }
    }

    /// The `upn` claim mirrors the account identifier for both variants.
    pub fn principal_name(&self) -> &str {
        match self {
            Self::Local(user) => &user.name,
            Self::Provider(user) => &user.user_principal_name,
        }
    }
}

/// How the session was authenticated; becomes the `auth_method`/`auth_type`
/// claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    Passkey,
    Provider,
    Registration,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passkey => "passkey",
            Self::Provider => "provider",
            Self::Registration => "registration",
        }
    }
}

impl std::str::FromStr for AuthMethod {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passkey" => Ok(Self::Passkey),
            "provider" => Ok(Self::Provider),
            "registration" => Ok(Self::Registration),
            _ => Err(TokenError::InvalidMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method-specific proof attached to token issuance.
#[derive(Clone, Debug)]
pub enum AuthEvidence {
    /// Assertion from a passkey ceremony
    Assertion(PasskeyAssertion),
    /// Provider access token (real or simulated)
    AccessToken(String),
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
    pub kid: String,
}

/// Claims of the mock token.
///
/// Field names follow the wire format: `credentialId`/`authenticatorData`
/// are camelCase, everything else snake_case. Absent optionals are omitted
/// from the encoded payload.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub auth_method: String,
    pub auth_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(
        default,
        rename = "credentialId",
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_id: Option<String>,
    #[serde(
        default,
        rename = "authenticatorData",
        skip_serializing_if = "Option::is_none"
    )]
    pub authenticator_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amr: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_hash: Option<String>,
}

/// Read-only view produced by decoding; the signature segment is carried
/// opaquely and never verified.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedToken {
    pub header: TokenHeader,
    pub claims: TokenClaims,
    pub signature: String,
}
