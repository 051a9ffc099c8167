//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod token_verifier;
mod user_repository;
mod users_query;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::{FixtureTokenVerifier, TokenVerificationError, TokenVerifier};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{InMemoryUserRepository, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
