//! Token verification adapters.

mod jwt;

pub use jwt::JwtTokenVerifier;
