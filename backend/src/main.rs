//! Attendance backend entry-point: loads configuration, seeds the data
//! directory, and serves the users API.

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use attendance::inbound::http::health::HealthState;
use attendance::seeding::seed_on_startup;
use attendance::server::{AppConfig, ServerConfig, create_server};
use ortho_config::OrthoConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;

    seed_on_startup(&config).await.map_err(io::Error::other)?;

    let server_config = ServerConfig::from_app_config(&config).map_err(io::Error::other)?;
    info!(
        host = server_config.bind_addr().0,
        port = server_config.bind_addr().1,
        users_file = %server_config.users_file().display(),
        "starting attendance backend"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &server_config)?;
    server.await
}
