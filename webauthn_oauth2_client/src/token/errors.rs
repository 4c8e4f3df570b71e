use thiserror::Error;

use crate::utils::UtilError;

/// Errors from mock-token issuance and decoding.
#[derive(Debug, Error, Clone)]
pub enum TokenError {
    /// The string is not a three-segment token, or a segment is not
    /// decodable. Fatal to the decode call only.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// A header or claims value could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Unknown authentication-method tag.
    #[error("Invalid auth method: {0}")]
    InvalidMethod(String),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
