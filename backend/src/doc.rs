//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints, the schema wrappers
//! from [`crate::inbound::http::schemas`], and the bearer security scheme.
//! Swagger UI serves it in debug builds; `cargo run --bin openapi-dump`
//! prints it for external tooling.

use crate::inbound::http::schemas::{ErrorBodySchema, RoleSchema, UserViewSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME: &str = "BearerAuth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Attendance backend API",
        description = "Bearer-authenticated read access to the user directory, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserViewSchema, RoleSchema, ErrorBodySchema)),
    tags(
        (name = "users", description = "Read access to stored users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
