mod errors;
mod issuer;
mod types;

pub use errors::TokenError;
pub use issuer::{decode_token, issue_token};
pub use types::{AuthEvidence, AuthMethod, DecodedToken, Identity, TokenClaims, TokenHeader};
