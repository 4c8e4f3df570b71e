use crate::common::{FakeCeremonyDriver, FakePopup, harness, query_param};

use webauthn_oauth2_client::{
    AuthMethod, CeremonyFailureKind, FallbackReason, Identity, PasskeyAuthOutcome,
    ProviderAuthOutcome, decode_token,
};

/// Exactly one identity variant is active at a time: a provider sign-in
/// replaces a passkey-established local identity.
#[tokio::test]
async fn test_provider_sign_in_replaces_local_identity() {
    let mut harness = harness(
        FakeCeremonyDriver::yielding("cred-1"),
        FakePopup::succeeding("popup-access-token"),
    );

    harness.coordinator.register("a@b.com").await.unwrap();
    assert!(matches!(
        harness.coordinator.current_user(),
        Some(Identity::Local(_))
    ));

    let outcome = harness.coordinator.sign_in_with_provider().await.unwrap();
    assert!(matches!(outcome, ProviderAuthOutcome::Completed(_)));
    assert!(matches!(
        harness.coordinator.current_user(),
        Some(Identity::Provider(_))
    ));
}

/// The full fallback chain: passkey ceremony fails with an offer, the
/// caller takes it, the popup is blocked, the redirect resolves on the next
/// page load.
#[tokio::test(start_paused = true)]
async fn test_passkey_fallback_through_provider_redirect() {
    let mut harness = harness(
        FakeCeremonyDriver::failing(CeremonyFailureKind::NoCredential, "no credentials available"),
        FakePopup::blocked(),
    );

    let outcome = harness.coordinator.sign_in_with_passkey().await.unwrap();
    match outcome {
        PasskeyAuthOutcome::FallbackToProvider { reason, .. } => {
            assert_eq!(reason, FallbackReason::NoCredential);
        }
        other => panic!("Expected fallback offer, got {other:?}"),
    }

    // Caller accepts the offer; popup fails, redirect starts.
    let outcome = harness.coordinator.sign_in_with_provider().await.unwrap();
    assert!(matches!(outcome, ProviderAuthOutcome::RedirectStarted));

    let auth_url = harness.navigator.last_navigation().expect("navigated");
    let state = query_param(&auth_url, "state").expect("state parameter");
    harness
        .navigator
        .arrive_at(&format!("https://localhost:8443/?code=C&state={state}"));

    let success = harness
        .coordinator
        .handle_redirect_callback()
        .await
        .unwrap()
        .expect("identity");
    assert_eq!(success.method, AuthMethod::Provider);
    assert!(matches!(
        harness.coordinator.current_user(),
        Some(Identity::Provider(_))
    ));
}

/// Every token the coordinator issues decodes to the claims it was built
/// from, with the fixed lifetime.
#[tokio::test]
async fn test_all_issued_tokens_decode_consistently() {
    let mut harness = harness(
        FakeCeremonyDriver::yielding("cred-1"),
        FakePopup::succeeding("popup-access-token"),
    );

    let registration = harness.coordinator.register("a@b.com").await.unwrap();
    let passkey = match harness.coordinator.sign_in_with_passkey().await.unwrap() {
        PasskeyAuthOutcome::Authenticated(success) => success,
        other => panic!("Expected authentication, got {other:?}"),
    };
    let provider = match harness.coordinator.sign_in_with_provider().await.unwrap() {
        ProviderAuthOutcome::Completed(success) => success,
        other => panic!("Expected completion, got {other:?}"),
    };

    for (success, expected_method) in [
        (&registration, "registration"),
        (&passkey, "passkey"),
        (&provider, "provider"),
    ] {
        let decoded = decode_token(&success.token).unwrap();
        assert_eq!(decoded.header.typ, "JWT");
        assert_eq!(decoded.claims.auth_method, expected_method);
        assert_eq!(decoded.claims.auth_type, expected_method);
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 3600);
        assert_eq!(decoded.claims.nbf, decoded.claims.iat);
    }
}
