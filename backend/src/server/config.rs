//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use card_aggregator::domain::CacheWritePolicy;
use card_aggregator::domain::ports::{CardListCache, CardSource};
use card_aggregator::outbound::persistence::DbPool;

/// Infrastructure handles built once in `main` and shared by every worker.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) cache: Arc<dyn CardListCache>,
    pub(crate) source: Arc<dyn CardSource>,
    pub(crate) write_policy: CacheWritePolicy,
}

impl ServerConfig {
    /// Construct a configuration using the best-effort cache write policy.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        cache: Arc<dyn CardListCache>,
        source: Arc<dyn CardSource>,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            cache,
            source,
            write_policy: CacheWritePolicy::default(),
        }
    }

    /// Choose how cache write failures after an upstream fetch are handled.
    #[must_use]
    pub fn with_write_policy(mut self, write_policy: CacheWritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }
}
