//! HS256 JWT implementation of [`TokenVerifier`].
//!
//! Tokens are issued by the login collaborator with a shared secret. Only the
//! signature and, when present, `exp`/`nbf` are checked; `aud` is ignored and
//! the claims are handed to the domain untouched.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::ports::{TokenVerificationError, TokenVerifier};
use crate::domain::{BearerToken, Principal};

/// Verifies HS256-signed JWTs against a shared secret.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Build a verifier for tokens signed with `secret`.
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_nbf = true;
        validation.validate_aud = false;
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl std::fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenVerifier").finish_non_exhaustive()
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &BearerToken) -> Result<Principal, TokenVerificationError> {
        match jsonwebtoken::decode::<Map<String, Value>>(token.as_str(), &self.key, &self.validation)
        {
            Ok(data) => Ok(Principal::new(data.claims)),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => {
                    debug!("bearer token expired");
                    Err(TokenVerificationError::expired())
                }
                kind => {
                    debug!(reason = ?kind, "bearer token rejected");
                    Err(TokenVerificationError::rejected(err.to_string()))
                }
            },
        }
    }
}
