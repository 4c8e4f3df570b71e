use crate::config::AuthConfig;
use crate::passkey::config::{PASSKEY_TIMEOUT, PASSKEY_USER_VERIFICATION};
use crate::passkey::errors::PasskeyError;
use crate::passkey::types::{
    AllowCredential, CredentialRequestOptions, PasskeyCredential,
};
use crate::utils::{base64url_encode, gen_random_bytes};

/// Builds request options for an assertion ceremony.
///
/// An empty `allowed` slice leaves the allow list empty, which asks the
/// platform for the discoverable-credential flow. The challenge is freshly
/// minted per call.
pub(in crate::passkey) fn create_request_options(
    config: &AuthConfig,
    allowed: &[PasskeyCredential],
) -> Result<CredentialRequestOptions, PasskeyError> {
    let allow_credentials = allowed
        .iter()
        .map(|credential| AllowCredential {
            type_: "public-key".to_string(),
            id: base64url_encode(&credential.raw_id),
        })
        .collect();

    let options = CredentialRequestOptions {
        challenge: base64url_encode(&gen_random_bytes(32)?),
        timeout: (*PASSKEY_TIMEOUT) * 1000, // Convert seconds to milliseconds
        rp_id: config.rp_id.clone(),
        allow_credentials,
        user_verification: PASSKEY_USER_VERIFICATION.to_string(),
    };

    tracing::debug!("Assertion options: {:?}", options);

    Ok(options)
}
