//! Bearer authentication guard.
//!
//! [`Authenticated`] is an extractor: listing it first in a handler's
//! arguments rejects the request before any other extractor or store access
//! runs. It reads `Authorization`, parses a [`BearerToken`], and asks the
//! configured [`TokenVerifier`](crate::domain::ports::TokenVerifier) for a
//! [`Principal`].

use std::ops::Deref;

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::{debug, error};

use crate::domain::{AuthError, BearerToken, Error, Principal};
use crate::inbound::http::state::HttpState;

/// Principal of a request that passed the bearer guard.
#[derive(Debug, Clone)]
pub struct Authenticated(Principal);

impl Deref for Authenticated {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Run the guard against a request.
pub fn authenticate(req: &HttpRequest) -> Result<Principal, Error> {
    let token = bearer_token(req)?;
    let Some(state) = req.app_data::<web::Data<HttpState>>() else {
        error!("HttpState missing from app data; auth guard cannot verify tokens");
        return Err(Error::internal("authentication state is not configured"));
    };
    state.tokens.verify(&token).map_err(|err| {
        debug!(reason = %err, "bearer token rejected");
        Error::from(AuthError::InvalidToken)
    })
}

fn bearer_token(req: &HttpRequest) -> Result<BearerToken, Error> {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        debug!("request has no Authorization header");
        return Err(AuthError::Unauthenticated.into());
    };
    let Ok(value) = value.to_str() else {
        debug!("Authorization header is not visible ASCII");
        return Err(BearerToken::reject_opaque_header(value.as_bytes()).into());
    };
    BearerToken::from_header_value(value).map_err(|err| {
        debug!("Authorization header is not a bearer credential");
        Error::from(err)
    })
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Authenticated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockTokenVerifier, MockUsersQuery, TokenVerificationError};
    use crate::inbound::http::test_utils::{FIXTURE_TOKEN, fixture_state};
    use actix_web::http::StatusCode;
    use actix_web::http::header::HeaderValue;
    use actix_web::{App, HttpResponse, test as actix_test};
    use rstest::rstest;
    use std::sync::Arc;

    async fn guarded(principal: Authenticated) -> HttpResponse {
        HttpResponse::Ok().body(principal.subject().unwrap_or_default())
    }

    #[rstest]
    #[case(None, StatusCode::UNAUTHORIZED)]
    #[case(Some("Basic abc"), StatusCode::UNAUTHORIZED)]
    #[case(Some("Bearer wrong"), StatusCode::UNAUTHORIZED)]
    #[case(Some("Bearer fixture-token"), StatusCode::OK)]
    #[actix_web::test]
    async fn guard_gates_requests(#[case] header: Option<&str>, #[case] expected: StatusCode) {
        let app = actix_test::init_service(
            App::new()
                .app_data(fixture_state(Vec::new()))
                .route("/", web::get().to(guarded)),
        )
        .await;
        let mut request = actix_test::TestRequest::get().uri("/");
        if let Some(value) = header {
            request = request.insert_header((AUTHORIZATION, value));
        }
        let response = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), expected);
    }

    #[rstest]
    fn missing_header_is_unauthenticated_and_skips_verifier() {
        let mut tokens = MockTokenVerifier::new();
        tokens.expect_verify().never();
        let state = HttpState::new(Arc::new(MockUsersQuery::new()), Arc::new(tokens));
        let req = actix_test::TestRequest::default()
            .app_data(web::Data::new(state))
            .to_http_request();

        let err = authenticate(&req).expect_err("no header");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Not authenticated");
    }

    #[rstest]
    fn rejected_token_is_invalid_token() {
        let mut tokens = MockTokenVerifier::new();
        tokens
            .expect_verify()
            .times(1)
            .returning(|_| Err(TokenVerificationError::expired()));
        let state = HttpState::new(Arc::new(MockUsersQuery::new()), Arc::new(tokens));
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer stale"))
            .app_data(web::Data::new(state))
            .to_http_request();

        let err = authenticate(&req).expect_err("verifier rejects");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid token");
    }

    #[rstest]
    #[case(HeaderValue::from_static("Bearer "), "Not authenticated")]
    #[case(HeaderValue::from_static("Bearer  fixture-token"), "Invalid token")]
    #[case(
        HeaderValue::from_bytes(b"Bearer \xff").expect("obs-text header"),
        "Invalid token"
    )]
    #[case(
        HeaderValue::from_bytes(b"Basic \xff").expect("obs-text header"),
        "Not authenticated"
    )]
    fn header_edge_cases_are_classified(#[case] header: HeaderValue, #[case] expected: &str) {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, header))
            .app_data(fixture_state(Vec::new()))
            .to_http_request();

        let err = authenticate(&req).expect_err("header rejected");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn accepted_token_yields_principal() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {FIXTURE_TOKEN}")))
            .app_data(fixture_state(Vec::new()))
            .to_http_request();

        let principal = authenticate(&req).expect("fixture token accepted");
        assert_eq!(principal.subject().as_deref(), Some("fixture"));
    }

    #[rstest]
    fn missing_state_is_internal() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer anything"))
            .to_http_request();
        let err = authenticate(&req).expect_err("state missing");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
