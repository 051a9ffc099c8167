//! Authentication primitives: bearer tokens and the authenticated principal.
//!
//! Keep header parsing outside the HTTP adapter by exposing constructors that
//! validate raw strings before a handler talks to a port or service.

use std::fmt;

use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::domain::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Reasons a request fails authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is absent or not `Bearer <token>`.
    #[error("Not authenticated")]
    Unauthenticated,
    /// A bearer token was presented but the verifier rejected it.
    #[error("Invalid token")]
    InvalidToken,
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Error::unauthorized(value.to_string())
    }
}

/// Bearer credential extracted from an `Authorization` header.
///
/// ## Invariants
/// - The header carried text after `"Bearer "`.
/// - The token contains no spaces. It may be empty when that text starts
///   with a space; verification then rejects it.
///
/// # Examples
/// ```
/// use attendance::domain::{AuthError, BearerToken};
///
/// let token = BearerToken::from_header_value("Bearer abc.def").unwrap();
/// assert_eq!(token.as_str(), "abc.def");
/// assert_eq!(
///     BearerToken::from_header_value("Basic abc").unwrap_err(),
///     AuthError::Unauthenticated
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Parse the raw `Authorization` header value.
    ///
    /// The token is the text after `"Bearer "` up to the next space. A header
    /// with nothing after the prefix is [`AuthError::Unauthenticated`].
    pub fn from_header_value(value: &str) -> Result<Self, AuthError> {
        let rest = value
            .strip_prefix(BEARER_PREFIX)
            .filter(|rest| !rest.is_empty())
            .ok_or(AuthError::Unauthenticated)?;
        let token = rest.split(' ').next().unwrap_or_default();
        Ok(Self(Zeroizing::new(token.to_owned())))
    }

    /// Classify a header whose bytes are not visible ASCII.
    ///
    /// Such a value can never hold a usable token, so it is either missing a
    /// credential or carries one that cannot verify.
    pub fn reject_opaque_header(value: &[u8]) -> AuthError {
        match value.strip_prefix(BEARER_PREFIX.as_bytes()) {
            Some(rest) if !rest.is_empty() => AuthError::InvalidToken,
            _ => AuthError::Unauthenticated,
        }
    }

    /// Raw token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Authenticated identity derived from a verified token.
///
/// The claims are carried opaquely; no access decision reads them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Principal {
    claims: Map<String, Value>,
}

impl Principal {
    /// Wrap the decoded token payload.
    pub fn new(claims: Map<String, Value>) -> Self {
        Self { claims }
    }

    /// Decoded claims, as produced by the token verifier.
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// The `sub` claim rendered as text, if present. Used for log correlation.
    pub fn subject(&self) -> Option<String> {
        match self.claims.get("sub")? {
            Value::String(sub) => Some(sub.clone()),
            Value::Number(sub) => Some(sub.to_string()),
            _ => None,
        }
    }
}
