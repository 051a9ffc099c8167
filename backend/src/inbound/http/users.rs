//! Users API handlers.
//!
//! ```text
//! GET /users        Authorization: Bearer <token>
//! GET /users/{id}   Authorization: Bearer <token>
//! ```
//!
//! Both endpoints only require a verified token; roles are not consulted.

use actix_web::{HttpRequest, error::PathError, get, web};

use crate::domain::users_service::USER_NOT_FOUND;
use crate::domain::{Error, UserId, UserView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::{ErrorBodySchema, UserViewSchema};
use crate::inbound::http::state::HttpState;

/// Detail returned when `{id}` is not an integer.
pub const INVALID_USER_ID: &str = "user id must be an integer";

/// Path extractor configuration for `{id}`.
///
/// An integer too large for [`UserId`] cannot match a stored user, so it is
/// `404`. Any other segment that fails to parse is `400`.
pub fn user_path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        let segment = req.match_info().get("id").unwrap_or_default();
        if is_integer_literal(segment) {
            tracing::debug!(id = segment, "user id outside the stored range");
            return Error::not_found(USER_NOT_FOUND).into();
        }
        tracing::debug!(error = %err, "rejected user id path segment");
        Error::invalid_request(INVALID_USER_ID).into()
    })
}

fn is_integer_literal(segment: &str) -> bool {
    let digits = segment.strip_prefix(['+', '-']).unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use attendance::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users in storage order", body = [UserViewSchema]),
        (status = 401, description = "Not authenticated or invalid token", body = ErrorBodySchema),
        (status = 500, description = "Internal server error", body = ErrorBodySchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    principal: Authenticated,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserView>>> {
    let users = state.users.list_users(&principal).await?;
    Ok(web::Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserViewSchema),
        (status = 400, description = "Malformed user id", body = ErrorBodySchema),
        (status = 401, description = "Not authenticated or invalid token", body = ErrorBodySchema),
        (status = 404, description = "User not found", body = ErrorBodySchema),
        (status = 500, description = "Internal server error", body = ErrorBodySchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    principal: Authenticated,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserView>> {
    let id = UserId::new(path.into_inner());
    let user = state.users.get_user(&principal, id).await?;
    Ok(web::Json(user))
}
