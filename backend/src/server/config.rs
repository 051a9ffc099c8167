//! Application configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ATTENDANCE_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::fmt;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use rand::RngCore;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use zeroize::Zeroizing;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_DIR: &str = "data";
const EPHEMERAL_SECRET_LEN: usize = 32;

/// Errors raised while resolving configuration into server settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No signing secret was configured and ephemeral secrets are disabled.
    #[error("ATTENDANCE_JWT_SECRET must be set")]
    MissingJwtSecret,
}

/// Configuration values for the attendance server.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ATTENDANCE")]
pub struct AppConfig {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Directory holding the JSON data files.
    pub data_dir: Option<PathBuf>,
    /// Explicit path to the users file.
    pub users_file: Option<PathBuf>,
    /// Shared HS256 secret for bearer tokens.
    pub jwt_secret: Option<String>,
    /// Write missing data files before serving.
    pub seed_on_startup: Option<bool>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("users_file", &self.users_file)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("seed_on_startup", &self.seed_on_startup)
            .finish()
    }
}

impl AppConfig {
    /// Interface to bind, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Data directory, defaulting to `./data`.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Users file, defaulting to `users.json` inside [`Self::data_dir`].
    pub fn users_file(&self) -> PathBuf {
        self.users_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(seed_data::USERS_FILE))
    }

    /// Whether startup seeding is enabled. On unless explicitly disabled.
    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(true)
    }

    /// Resolve the token signing secret.
    ///
    /// Debug builds fall back to a random per-process secret so the server
    /// can start without configuration; release builds require one.
    pub fn jwt_secret(&self) -> Result<Zeroizing<Vec<u8>>, ConfigError> {
        resolve_secret(self.jwt_secret.as_deref(), cfg!(debug_assertions))
    }
}

fn resolve_secret(
    configured: Option<&str>,
    allow_ephemeral: bool,
) -> Result<Zeroizing<Vec<u8>>, ConfigError> {
    match configured.map(str::trim) {
        Some(secret) if !secret.is_empty() => Ok(Zeroizing::new(secret.as_bytes().to_vec())),
        _ if allow_ephemeral => {
            warn!("ATTENDANCE_JWT_SECRET unset; using an ephemeral secret (dev only)");
            let mut secret = Zeroizing::new(vec![0_u8; EPHEMERAL_SECRET_LEN]);
            rand::thread_rng().fill_bytes(&mut secret);
            Ok(secret)
        }
        _ => Err(ConfigError::MissingJwtSecret),
    }
}
