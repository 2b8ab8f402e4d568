//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `CARDS_*` environment variables, matching CLI flags, or a
//! configuration file; accessors apply defaults and validate formats.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Listen address used when `CARDS_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Upstream request timeout used when `CARDS_UPSTREAM_TIMEOUT_SECS` is unset.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
/// Connection pool size used when `CARDS_POOL_MAX_SIZE` is unset.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Invalid or missing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{setting} is required")]
    Missing { setting: &'static str },
    #[error("{setting} is invalid: {message}")]
    Invalid {
        setting: &'static str,
        message: String,
    },
}

/// Runtime settings for the card aggregator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CARDS")]
pub struct CardsSettings {
    /// Base URL of the core banking system.
    pub core_banking_system_url: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Redis connection URL; the in-process cache is used when unset.
    pub redis_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Timeout applied to each core banking request, in seconds.
    pub upstream_timeout_secs: Option<u64>,
    /// Upper bound on pooled PostgreSQL and Redis connections.
    pub pool_max_size: Option<u32>,
    /// Fail `GET /cards` when the cache write after a miss fails.
    #[ortho_config(default = false)]
    pub strict_cache_writes: bool,
}

impl CardsSettings {
    /// Parsed core banking base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is absent or not a URL.
    pub fn core_banking_system_url(&self) -> Result<Url, SettingsError> {
        const SETTING: &str = "CARDS_CORE_BANKING_SYSTEM_URL";
        let raw = self
            .core_banking_system_url
            .as_deref()
            .ok_or(SettingsError::Missing { setting: SETTING })?;
        Url::parse(raw).map_err(|err| SettingsError::Invalid {
            setting: SETTING,
            message: err.to_string(),
        })
    }

    /// PostgreSQL connection URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] when the value is absent.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::Missing {
                setting: "CARDS_DATABASE_URL",
            })
    }

    /// Redis connection URL, if configured.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Listen address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::Invalid {
                setting: "CARDS_BIND_ADDR",
                message: err.to_string(),
            })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upstream_timeout_secs
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        )
    }

    /// Upper bound shared by the database and Redis pools.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the value is zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::Invalid {
                setting: "CARDS_POOL_MAX_SIZE",
                message: "must be greater than zero".to_owned(),
            }),
            size => Ok(size),
        }
    }
}

impl From<SettingsError> for std::io::Error {
    fn from(err: SettingsError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}
