use crate::common::{FakeCeremonyDriver, FakePopup, harness, test_config};

use webauthn_oauth2_client::{
    AuthEvidence, AuthMethod, CeremonyFailureKind, CoordinationError, FallbackReason, Identity,
    LocalUser, PasskeyAuthOutcome, PasskeyError, PasskeyService, decode_token, issue_token,
};

/// End-to-end scenario fixed by the design: an assertion with id `cred-1`
/// issued for a known local identity produces exactly these claims.
#[tokio::test]
async fn test_assertion_to_token_scenario() {
    let service = PasskeyService::new(Box::new(FakeCeremonyDriver::yielding("cred-1")));
    let config = test_config();
    assert_eq!(config.rp_id, "localhost");
    assert_eq!(config.scopes, "openid profile User.Read");

    let assertion = service.authenticate(&config).await.unwrap();
    assert_eq!(assertion.id, "cred-1");

    let identity = Identity::Local(LocalUser {
        id: "u1".to_string(),
        name: "a@b.com".to_string(),
        display_name: "a".to_string(),
    });
    let token = issue_token(
        &identity,
        AuthMethod::Passkey,
        Some(&AuthEvidence::Assertion(assertion)),
    )
    .unwrap();

    let claims = decode_token(&token).unwrap().claims;
    assert_eq!(claims.auth_method, "passkey");
    assert_eq!(claims.amr.as_deref(), Some(&["fido".to_string()][..]));
    assert_eq!(claims.credential_id.as_deref(), Some("cred-1"));
    assert_eq!(claims.sub, "a@b.com");
}

#[tokio::test]
async fn test_register_then_list_contains_exactly_that_credential() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-1"), FakePopup::blocked());

    let success = harness.coordinator.register("a@b.com").await.unwrap();
    assert_eq!(success.method, AuthMethod::Registration);

    let listed = harness.coordinator.registered_credentials();
    let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["cred-1"]);

    // Defensive copy: structurally equal, independently owned collections.
    let listed_again = harness.coordinator.registered_credentials();
    assert_eq!(listed, listed_again);
    assert_ne!(listed.as_ptr(), listed_again.as_ptr());
}

#[tokio::test]
async fn test_registration_token_is_tagged_and_identity_kept() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-1"), FakePopup::blocked());

    let success = harness.coordinator.register("a@b.com").await.unwrap();
    let claims = decode_token(&success.token).unwrap().claims;
    assert_eq!(claims.auth_method, "registration");
    assert_eq!(claims.sub, "a@b.com");
    assert!(claims.amr.is_none());

    match harness.coordinator.current_user() {
        Some(Identity::Local(user)) => {
            assert_eq!(user.name, "a@b.com");
            assert_eq!(user.display_name, "a");
        }
        other => panic!("Expected a local identity, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_requires_a_upn() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-1"), FakePopup::blocked());
    let err = harness.coordinator.register("  ").await.unwrap_err();
    assert!(matches!(err, CoordinationError::MissingUpn));
    assert!(harness.coordinator.registered_credentials().is_empty());
}

#[tokio::test]
async fn test_sign_in_reuses_the_registered_identity() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-1"), FakePopup::blocked());
    harness.coordinator.register("a@b.com").await.unwrap();

    let outcome = harness.coordinator.sign_in_with_passkey().await.unwrap();
    let success = match outcome {
        PasskeyAuthOutcome::Authenticated(success) => success,
        other => panic!("Expected authentication, got {other:?}"),
    };

    let claims = decode_token(&success.token).unwrap().claims;
    assert_eq!(claims.sub, "a@b.com");
    assert_eq!(claims.auth_method, "passkey");
    assert_eq!(claims.credential_id.as_deref(), Some("cred-1"));
}

#[tokio::test]
async fn test_sign_in_without_prior_identity_mints_a_demo_user() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-9"), FakePopup::blocked());

    let outcome = harness.coordinator.sign_in_with_passkey().await.unwrap();
    let success = match outcome {
        PasskeyAuthOutcome::Authenticated(success) => success,
        other => panic!("Expected authentication, got {other:?}"),
    };

    let claims = decode_token(&success.token).unwrap().claims;
    assert!(claims.sub.starts_with("demo-user-"));
    assert!(claims.sub.ends_with("@example.com"));
}

#[tokio::test]
async fn test_allow_list_sign_in_uses_session_registry() {
    let mut harness = harness(FakeCeremonyDriver::yielding("cred-1"), FakePopup::blocked());
    harness.coordinator.register("a@b.com").await.unwrap();

    let outcome = harness
        .coordinator
        .sign_in_with_registered_passkey()
        .await
        .unwrap();
    assert!(matches!(outcome, PasskeyAuthOutcome::Authenticated(_)));
}

#[tokio::test]
async fn test_ceremony_failure_offers_provider_fallback() {
    let cases = [
        (
            CeremonyFailureKind::NoCredential,
            FallbackReason::NoCredential,
        ),
        (CeremonyFailureKind::Cancelled, FallbackReason::Cancelled),
        (CeremonyFailureKind::Timeout, FallbackReason::Cancelled),
        (CeremonyFailureKind::Other, FallbackReason::Other),
    ];

    for (kind, expected) in cases {
        let mut harness = harness(
            FakeCeremonyDriver::failing(kind, "ceremony did not complete"),
            FakePopup::blocked(),
        );
        let outcome = harness.coordinator.sign_in_with_passkey().await.unwrap();
        match outcome {
            PasskeyAuthOutcome::FallbackToProvider { reason, detail } => {
                assert_eq!(reason, expected);
                assert_eq!(detail, "ceremony did not complete");
            }
            other => panic!("Expected fallback offer, got {other:?}"),
        }
        assert!(
            harness.coordinator.current_user().is_none(),
            "a failed ceremony must not establish an identity"
        );
    }
}

#[tokio::test]
async fn test_unsupported_platform_is_an_error_not_a_fallback() {
    let mut harness = harness(FakeCeremonyDriver::unsupported(), FakePopup::blocked());
    assert!(!harness.coordinator.check_support().await);

    let err = harness.coordinator.sign_in_with_passkey().await.unwrap_err();
    assert!(matches!(
        err,
        CoordinationError::Passkey(PasskeyError::UnsupportedPlatform)
    ));
}
