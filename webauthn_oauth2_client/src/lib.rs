//! webauthn_oauth2_client - Client-side authentication orchestration
//!
//! This crate coordinates two credential sources - platform passkeys
//! (WebAuthn ceremonies) and an identity provider's OAuth2
//! authorization-code flow - and issues a locally-constructed,
//! non-cryptographically-signed token for the authenticated session.
//!
//! Platform specifics (credential ceremonies, session storage, navigation,
//! the login popup, the user-info lookup) sit behind narrow capability
//! traits, so the orchestration logic runs and tests without a browser.
//! The code-for-token exchange is explicitly simulated and the token's
//! signature segment is a placeholder: nothing here claims authenticity.

mod config;
mod coordination;
mod oauth2;
mod passkey;
mod token;
mod utils;

pub use config::AuthConfig;

pub use coordination::{
    AuthCoordinator, AuthSuccess, CoordinationError, FallbackReason, PasskeyAuthOutcome,
    ProviderAuthOutcome,
};

pub use passkey::{
    CeremonyDriver, CeremonyFailure, CeremonyFailureKind, CredentialCreationOptions,
    CredentialRequestOptions, LocalUser, PasskeyAssertion, PasskeyCredential, PasskeyError,
    PasskeyService, PublicKeyCredentialUserEntity,
};

pub use oauth2::{
    MemorySessionStore, NavigationSink, OAuth2Error, OAuthSession, PopupDriver, PopupLoginRequest,
    PopupLoginResult, ProfileSource, ProviderFlow, ProviderUser, SessionStore, TokenResponse,
    UserInfoProfileSource,
};

pub use token::{
    AuthEvidence, AuthMethod, DecodedToken, Identity, TokenClaims, TokenError, TokenHeader,
    decode_token, issue_token,
};

pub use utils::{UtilError, base64url_decode, base64url_encode, gen_random_string};
