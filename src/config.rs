//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Default bind address when neither `TASKBOARD_ADDR` nor `PORT` is set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default SQLite database path.
const DEFAULT_DATABASE: &str = "taskboard.sqlite3";

/// Errors returned while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bind address could not be parsed.
    #[error("invalid bind address '{0}'")]
    InvalidAddr(String),

    /// The `PORT` override could not be parsed.
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    database_url: String,
    static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// `TASKBOARD_ADDR` sets the full bind address; `PORT` overrides only the
    /// port on the loopback interface. `TASKBOARD_DATABASE` names the SQLite
    /// file and `TASKBOARD_STATIC_DIR` optionally points at browser UI assets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an address or port value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match env::var("TASKBOARD_ADDR") {
            Ok(addr) => addr
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?,
            Err(_) => match env::var("PORT") {
                Ok(port) => {
                    let port: u16 = port
                        .parse()
                        .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
                    SocketAddr::from(([127, 0, 0, 1], port))
                }
                Err(_) => DEFAULT_ADDR
                    .parse()
                    .map_err(|_| ConfigError::InvalidAddr(DEFAULT_ADDR.to_owned()))?,
            },
        };

        let database_url =
            env::var("TASKBOARD_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_owned());
        let static_dir = env::var("TASKBOARD_STATIC_DIR").ok().map(PathBuf::from);

        Ok(Self {
            bind_addr,
            database_url,
            static_dir,
        })
    }

    /// Returns the socket address the server binds to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns the SQLite database path.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the optional static asset directory.
    #[must_use]
    pub fn static_dir(&self) -> Option<&PathBuf> {
        self.static_dir.as_ref()
    }
}
