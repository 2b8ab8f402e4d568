//! Connection pool backing the card configuration store.
//!
//! `CARDS_POOL_MAX_SIZE` sizes the pool; the idle floor follows it down so a
//! one-connection deployment is valid. Failures surface as [`PoolError`] and
//! the repository maps them to `CardConfigRepositoryError::Connection`.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Pool construction or checkout failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No card-config connection became free within the checkout timeout.
    #[error("card config pool checkout failed: {message}")]
    Checkout { message: String },

    /// Sizing was invalid or the initial connections could not be opened.
    #[error("card config pool could not be built: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Sizing and timeout for the card configuration pool.
///
/// Starts at ten connections with two idle and a thirty second checkout
/// timeout; `main` overrides the size from settings.
///
/// ```
/// use std::time::Duration;
/// use card_aggregator::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://cards@localhost/cards")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "postgres://cards@localhost/cards");
/// ```
#[derive(Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Resolve `(max_size, min_idle)` for the bb8 builder.
    ///
    /// `min_idle` never exceeds `max_size`, so a single-connection pool keeps
    /// at most one idle connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when `max_size` is zero.
    fn pool_sizes(&self) -> Result<(u32, Option<u32>), PoolError> {
        if self.max_size == 0 {
            return Err(PoolError::build("max_size must be greater than zero"));
        }
        let min_idle = self.min_idle.map(|idle| idle.min(self.max_size));
        Ok((self.max_size, min_idle))
    }
}

// The URL may carry credentials, so it is left out of debug output.
impl std::fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolConfig")
            .field("max_size", &self.max_size)
            .field("min_idle", &self.min_idle)
            .field("connection_timeout", &self.connection_timeout)
            .finish_non_exhaustive()
    }
}

/// Shared handle onto the card configuration database.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool and open its idle connections.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when `max_size` is zero or the pool cannot
    /// be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let (max_size, min_idle) = config.pool_sizes()?;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(max_size)
            .min_idle(min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Borrow a connection for a single repository call.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection is available within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
