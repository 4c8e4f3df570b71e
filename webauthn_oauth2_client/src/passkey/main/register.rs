use crate::config::AuthConfig;
use crate::passkey::config::{
    PASSKEY_ATTESTATION, PASSKEY_AUTHENTICATOR_ATTACHMENT, PASSKEY_REQUIRE_RESIDENT_KEY,
    PASSKEY_RP_NAME, PASSKEY_TIMEOUT, PASSKEY_USER_VERIFICATION,
};
use crate::passkey::errors::PasskeyError;
use crate::passkey::types::{
    AuthenticatorSelection, CredentialCreationOptions, LocalUser, PubKeyCredParam,
    PublicKeyCredentialUserEntity, RelyingParty,
};
use crate::utils::{base64url_encode, gen_random_bytes};

/// Builds creation options for a registration ceremony.
///
/// Every call mints a fresh 32-byte random challenge; a reused challenge is
/// a replay vector. Algorithm preference is ES256 then RS256.
pub(in crate::passkey) fn create_registration_options(
    user: &LocalUser,
    config: &AuthConfig,
) -> Result<CredentialCreationOptions, PasskeyError> {
    let challenge = base64url_encode(&gen_random_bytes(32)?);

    let options = CredentialCreationOptions {
        challenge,
        rp: RelyingParty {
            name: PASSKEY_RP_NAME.to_string(),
            id: config.rp_id.clone(),
        },
        user: PublicKeyCredentialUserEntity {
            id: user.id.clone(),
            name: user.name.clone(),
            display_name: user.display_name.clone(),
        },
        pub_key_cred_params: vec![
            PubKeyCredParam {
                type_: "public-key".to_string(),
                alg: -7, // ES256
            },
            PubKeyCredParam {
                type_: "public-key".to_string(),
                alg: -257, // RS256
            },
        ],
        authenticator_selection: AuthenticatorSelection {
            authenticator_attachment: PASSKEY_AUTHENTICATOR_ATTACHMENT.to_string(),
            user_verification: PASSKEY_USER_VERIFICATION.to_string(),
            require_resident_key: *PASSKEY_REQUIRE_RESIDENT_KEY,
        },
        timeout: (*PASSKEY_TIMEOUT) * 1000, // Convert seconds to milliseconds
        attestation: PASSKEY_ATTESTATION.to_string(),
    };

    tracing::debug!("Registration options: {:?}", options);

    Ok(options)
}
