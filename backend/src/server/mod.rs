//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;
use zeroize::Zeroizing;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UsersService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{get_user, list_users, user_path_config};
use crate::outbound::persistence::JsonUserRepository;
use crate::outbound::token::JwtTokenVerifier;

/// Settings required to start the HTTP server.
pub struct ServerConfig {
    bind_addr: (String, u16),
    users_file: PathBuf,
    jwt_secret: Zeroizing<Vec<u8>>,
}

impl ServerConfig {
    /// Construct server settings from explicit values.
    #[must_use]
    pub fn new(
        bind_addr: (String, u16),
        users_file: PathBuf,
        jwt_secret: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            bind_addr,
            users_file,
            jwt_secret,
        }
    }

    /// Resolve server settings from loaded configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when no signing secret is available.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            (config.host().to_owned(), config.port()),
            config.users_file(),
            config.jwt_secret()?,
        ))
    }

    /// Host and port the server binds to.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }

    /// Users file the repository reads.
    pub fn users_file(&self) -> &std::path::Path {
        &self.users_file
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("users_file", &self.users_file)
            .finish_non_exhaustive()
    }
}

/// Wire the JSON store and JWT verifier into handler state.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = JsonUserRepository::new(config.users_file.clone());
    web::Data::new(HttpState::new(
        Arc::new(UsersService::new(Arc::new(repository))),
        Arc::new(JwtTokenVerifier::hs256(&config.jwt_secret)),
    ))
}

/// Assemble the application: users API, health probes and, in debug
/// builds, Swagger UI.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(user_path_config())
        .wrap(Trace)
        .service(list_users)
        .service(get_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(config);
    let (host, port) = config.bind_addr();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind((host, port))?
        .run();

    health_state.mark_ready();
    Ok(server)
}
