mod errors;
mod main;
mod traits;
mod types;

pub(crate) mod config;

pub use errors::PasskeyError;
pub use main::PasskeyService;
pub use traits::CeremonyDriver;
pub use types::{
    CeremonyFailure, CeremonyFailureKind, CredentialCreationOptions, CredentialRequestOptions,
    LocalUser, PasskeyAssertion, PasskeyCredential, PublicKeyCredentialUserEntity,
};
