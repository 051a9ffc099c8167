//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TokenVerifier, UsersQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use attendance::domain::UsersService;
/// use attendance::domain::ports::{FixtureTokenVerifier, InMemoryUserRepository};
/// use attendance::inbound::http::state::HttpState;
///
/// let users = UsersService::new(Arc::new(InMemoryUserRepository::default()));
/// let state = HttpState::new(Arc::new(users), Arc::new(FixtureTokenVerifier::new("token")));
/// let _tokens = state.tokens.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// User read use-cases.
    pub users: Arc<dyn UsersQuery>,
    /// Bearer token verification used by the auth guard.
    pub tokens: Arc<dyn TokenVerifier>,
}

impl HttpState {
    /// Bundle the ports used by handlers.
    pub fn new(users: Arc<dyn UsersQuery>, tokens: Arc<dyn TokenVerifier>) -> Self {
        Self { users, tokens }
    }
}
