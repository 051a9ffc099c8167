//! Driven port for bearer token verification.
//!
//! Token issuance lives elsewhere; this side only decodes a presented token
//! into a [`Principal`] or reports that it is unusable.

use serde_json::Map;

use crate::domain::{BearerToken, Principal};

use super::define_port_error;

define_port_error! {
    /// Reasons a verifier rejects a token.
    pub enum TokenVerificationError {
        /// Signature, format, or claim validation failed.
        Rejected { reason: String } => "token rejected: {reason}",
        /// The token was valid once but has expired.
        Expired => "token expired",
    }
}

/// Port for turning a bearer token into an authenticated principal.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    /// Decode and validate the token.
    fn verify(&self, token: &BearerToken) -> Result<Principal, TokenVerificationError>;
}

/// Fixture verifier accepting exactly one static token.
///
/// # Examples
/// ```
/// use attendance::domain::BearerToken;
/// use attendance::domain::ports::{FixtureTokenVerifier, TokenVerifier};
///
/// let verifier = FixtureTokenVerifier::new("letmein");
/// let good = BearerToken::from_header_value("Bearer letmein").unwrap();
/// let bad = BearerToken::from_header_value("Bearer nope").unwrap();
/// assert!(verifier.verify(&good).is_ok());
/// assert!(verifier.verify(&bad).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FixtureTokenVerifier {
    accepted: String,
}

impl FixtureTokenVerifier {
    /// Accept only `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            accepted: token.into(),
        }
    }
}

impl TokenVerifier for FixtureTokenVerifier {
    fn verify(&self, token: &BearerToken) -> Result<Principal, TokenVerificationError> {
        if token.as_str() == self.accepted {
            let mut claims = Map::new();
            claims.insert("sub".to_owned(), "fixture".into());
            Ok(Principal::new(claims))
        } else {
            Err(TokenVerificationError::rejected("unknown fixture token"))
        }
    }
}
