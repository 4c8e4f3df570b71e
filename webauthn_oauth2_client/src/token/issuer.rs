use chrono::Utc;
use serde::de::DeserializeOwned;

use super::errors::TokenError;
use super::types::{AuthEvidence, AuthMethod, DecodedToken, Identity, TokenClaims, TokenHeader};
use crate::utils::{base64_encode, base64url_decode, base64url_encode, gen_random_string};

const TOKEN_ISSUER: &str = "webauthn-sample-app";
const TOKEN_AUDIENCE: &str = "webauthn-client";
const TOKEN_KEY_ID: &str = "webauthn-sample-key";
const TOKEN_LIFETIME_SECS: i64 = 3600;
const PROVIDER_IDP: &str = "live.com";
const AUTHENTICATOR_DATA_PREVIEW: usize = 50;
const AT_HASH_LEN: usize = 16;

/// Builds the three-segment mock token for an authenticated identity.
///
/// Deterministic in everything but `iat`-derived claims and the signature
/// placeholder. The signature carries no verification semantics; nothing
/// here claims authenticity.
pub fn issue_token(
    identity: &Identity,
    method: AuthMethod,
    evidence: Option<&AuthEvidence>,
) -> Result<String, TokenError> {
    let header = TokenHeader {
        alg: "RS256".to_string(),
        typ: "JWT".to_string(),
        kid: TOKEN_KEY_ID.to_string(),
    };

    let now = Utc::now().timestamp();
    let mut claims = TokenClaims {
        iss: TOKEN_ISSUER.to_string(),
        sub: identity.subject().to_string(),
        aud: TOKEN_AUDIENCE.to_string(),
        exp: now + TOKEN_LIFETIME_SECS,
        iat: now,
        nbf: now,
        upn: Some(identity.principal_name().to_string()),
        name: Some(identity.display_name().to_string()),
        auth_method: method.as_str().to_string(),
        auth_type: method.as_str().to_string(),
        tid: Some("common".to_string()),
        ver: Some("2.0".to_string()),
        credential_id: None,
        authenticator_data: None,
        amr: None,
        idp: None,
        at_hash: None,
    };

    match method {
        AuthMethod::Passkey => {
            if let Some(AuthEvidence::Assertion(assertion)) = evidence {
                claims.credential_id = Some(assertion.id.clone());
                claims.authenticator_data =
                    Some(preview(&base64url_encode(&assertion.authenticator_data)));
                claims.amr = Some(vec!["fido".to_string()]);
            }
        }
        AuthMethod::Provider => {
            claims.amr = Some(vec!["pwd".to_string(), "mfa".to_string()]);
            claims.idp = Some(PROVIDER_IDP.to_string());
            if let Some(AuthEvidence::AccessToken(access_token)) = evidence {
                claims.at_hash = Some(
                    base64_encode(access_token.as_bytes())
                        .chars()
                        .take(AT_HASH_LEN)
                        .collect(),
                );
            }
        }
        AuthMethod::Registration => {}
    }

    let header_segment = encode_segment(&header)?;
    let claims_segment = encode_segment(&claims)?;
    let signature = format!("mock-signature-{}", gen_random_string(15)?);

    Ok(format!("{header_segment}.{claims_segment}.{signature}"))
}

/// Splits and decodes a token without verifying anything.
///
/// Succeeds for any well-formed triple regardless of the signature segment;
/// a successful decode is not proof of authenticity.
pub fn decode_token(token: &str) -> Result<DecodedToken, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::MalformedToken(format!(
            "Expected 3 segments, got {}",
            parts.len()
        )));
    }

    let header: TokenHeader = decode_segment(parts[0])?;
    let claims: TokenClaims = decode_segment(parts[1])?;

    Ok(DecodedToken {
        header,
        claims,
        signature: parts[2].to_string(),
    })
}

fn encode_segment<T: serde::Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::Encoding(e.to_string()))?;
    Ok(base64url_encode(&json))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = base64url_decode(segment)
        .map_err(|e| TokenError::MalformedToken(format!("Failed to decode segment: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::MalformedToken(format!("Failed to parse segment: {e}")))
}

fn preview(encoded: &str) -> String {
    let head: String = encoded.chars().take(AUTHENTICATOR_DATA_PREVIEW).collect();
    format!("{head}...")
}
