use thiserror::Error;

use super::types::CeremonyFailure;
use crate::utils::UtilError;

/// Errors from the passkey credential lifecycle.
#[derive(Debug, Error)]
pub enum PasskeyError {
    /// The platform exposes no credential-ceremony capability. Not
    /// retryable; callers should offer a different method immediately.
    #[error("Passkeys are not supported on this platform")]
    UnsupportedPlatform,

    /// A registration or assertion ceremony ended without a credential:
    /// user cancellation, no matching credential, or a platform timeout.
    /// Never retried automatically.
    #[error("Ceremony failed: {0}")]
    CeremonyFailed(CeremonyFailure),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
