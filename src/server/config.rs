use std::{net::SocketAddr, time::Duration};

use storage::{
    selector::{DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URI, DEFAULT_PROBE_TIMEOUT},
    BackendConfig,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub backend: BackendConfig,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source.
    ///
    /// Unset variables take their defaults:
    /// - `MONGODB_URI`: `mongodb://localhost:27017/`
    /// - `DATABASE_NAME`: `mergington_high`
    /// - `MONGODB_PROBE_TIMEOUT_MS`: `1000`
    /// - `BIND_ADDR`: `0.0.0.0:8080`
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let probe_timeout = match lookup("MONGODB_PROBE_TIMEOUT_MS") {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "MONGODB_PROBE_TIMEOUT_MS",
                    value,
                    expected: "a whole number of milliseconds",
                })?,
            None => DEFAULT_PROBE_TIMEOUT,
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR",
                value: bind_addr.clone(),
                expected: "a socket address such as 0.0.0.0:8080",
            })?;

        Ok(Self {
            backend: BackendConfig {
                uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
                database: lookup("DATABASE_NAME")
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
                probe_timeout,
            },
            bind_addr,
        })
    }
}
