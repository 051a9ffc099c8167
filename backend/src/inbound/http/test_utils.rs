//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::UserRecord;
use crate::domain::UsersService;
use crate::domain::ports::{FixtureTokenVerifier, InMemoryUserRepository};
use crate::inbound::http::state::HttpState;

/// The only bearer token accepted by [`fixture_state`].
pub const FIXTURE_TOKEN: &str = "fixture-token";

/// Build handler state over in-memory records and the fixture verifier.
pub fn fixture_state(records: Vec<UserRecord>) -> web::Data<HttpState> {
    let users = UsersService::new(Arc::new(InMemoryUserRepository::new(records)));
    web::Data::new(HttpState::new(
        Arc::new(users),
        Arc::new(FixtureTokenVerifier::new(FIXTURE_TOKEN)),
    ))
}
