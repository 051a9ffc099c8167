//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered under the domain
//! type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Role)]
pub enum RoleSchema {
    /// Administrative staff.
    #[schema(rename = "admin")]
    Admin,
    /// Regular employee.
    #[schema(rename = "employee")]
    Employee,
}

/// OpenAPI schema for [`crate::domain::UserView`].
///
/// Public projection of a stored user; the password hash is never included.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserViewSchema {
    /// Unique user identifier.
    #[schema(example = 2)]
    id: i64,
    /// Display name.
    #[schema(example = "John Doe")]
    name: String,
    /// Login email.
    #[schema(example = "emp@example.com")]
    email: String,
    /// Access role.
    role: RoleSchema,
    /// Department name.
    #[schema(example = "Engineering")]
    department: String,
}

/// OpenAPI schema for error responses.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::error::ErrorBody)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    /// Human-readable reason for the failure.
    #[schema(example = "User not found")]
    detail: String,
}
