use std::path::PathBuf;

use thiserror::Error;

use crate::observability::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// Process configuration, read from the environment.
///
/// | Variable        | Default     |
/// |-----------------|-------------|
/// | `HOST`          | `127.0.0.1` |
/// | `PORT`          | `3000`      |
/// | `DATABASE_PATH` | unset: in-memory store |
/// | `LOG_FORMAT`    | `pretty`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_path: lookup("DATABASE_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
