use std::{env, sync::LazyLock};

pub(crate) static PASSKEY_RP_ID: LazyLock<String> =
    LazyLock::new(|| env::var("AUTH_RP_ID").unwrap_or_else(|_| "localhost".to_string()));

pub(super) static PASSKEY_RP_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("PASSKEY_RP_NAME").unwrap_or_else(|_| "WebAuthn Sample App".to_string())
});

/// Ceremony timeout in seconds. Converted to milliseconds where the
/// ceremony contract wants them.
pub(super) static PASSKEY_TIMEOUT: LazyLock<u32> = LazyLock::new(|| {
    env::var("PASSKEY_TIMEOUT")
        .map(|v| v.parse::<u32>().unwrap_or(60))
        .unwrap_or(60)
});

pub(super) static PASSKEY_USER_VERIFICATION: LazyLock<String> = LazyLock::new(|| {
    env::var("PASSKEY_USER_VERIFICATION").map_or(
        "preferred".to_string(),
        |v| match v.to_lowercase().as_str() {
            "required" => "required".to_string(),
            "preferred" => "preferred".to_string(),
            "discouraged" => "discouraged".to_string(),
            invalid => {
                tracing::warn!(
                    "Invalid user verification: {}. Using default 'preferred'",
                    invalid
                );
                "preferred".to_string()
            }
        },
    )
});

pub(super) static PASSKEY_ATTESTATION: LazyLock<String> =
    LazyLock::new(|| match env::var("PASSKEY_ATTESTATION").ok() {
        None => "direct".to_string(),
        Some(v) => match v.to_lowercase().as_str() {
            "none" => "none".to_string(),
            "direct" => "direct".to_string(),
            "indirect" => "indirect".to_string(),
            invalid => {
                tracing::warn!("Invalid attestation: {}. Using default 'direct'", invalid);
                "direct".to_string()
            }
        },
    });

pub(super) static PASSKEY_AUTHENTICATOR_ATTACHMENT: LazyLock<String> = LazyLock::new(|| {
    match env::var("PASSKEY_AUTHENTICATOR_ATTACHMENT").ok() {
        None => "platform".to_string(),
        Some(v) => match v.to_lowercase().as_str() {
            "platform" => "platform".to_string(),
            "cross-platform" => "cross-platform".to_string(),
            invalid => {
                tracing::warn!(
                    "Invalid authenticator attachment: {}. Using default 'platform'",
                    invalid
                );
                "platform".to_string()
            }
        },
    }
});

pub(super) static PASSKEY_REQUIRE_RESIDENT_KEY: LazyLock<bool> = LazyLock::new(|| {
    env::var("PASSKEY_REQUIRE_RESIDENT_KEY")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false)
});
