//! Redis-backed card list cache.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, RunError};
use bb8_redis::redis::{self, RedisError};
use tracing::debug;

use crate::domain::ports::{CardListCache, CardListCacheError, CardListCacheKey};

/// Card list cache storing raw bytes in Redis with `SET .. EX`.
#[derive(Clone)]
pub struct RedisCardListCache {
    pool: Pool<RedisConnectionManager>,
}

impl RedisCardListCache {
    /// Wrap an existing connection pool.
    pub fn new(pool: Pool<RedisConnectionManager>) -> Self {
        Self { pool }
    }

    /// Build a pool for `url` and wrap it.
    ///
    /// Connections are opened lazily, so an unreachable server surfaces on
    /// the first cache operation rather than here.
    pub async fn connect(url: &str, max_size: u32) -> Result<Self, RedisError> {
        let manager = RedisConnectionManager::new(url)?;
        let pool = Pool::builder().max_size(max_size).build(manager).await?;
        Ok(Self::new(pool))
    }
}

fn map_run_error(error: RunError<RedisError>) -> CardListCacheError {
    match error {
        RunError::User(err) => map_redis_error(&err),
        RunError::TimedOut => {
            CardListCacheError::backend("timed out waiting for a redis connection")
        }
    }
}

fn map_redis_error(error: &RedisError) -> CardListCacheError {
    debug!(error = %error, "redis command failed");
    CardListCacheError::backend(error.to_string())
}

/// Redis `EX` takes whole seconds and rejects zero.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl CardListCache for RedisCardListCache {
    async fn get(&self, key: &CardListCacheKey) -> Result<Option<Vec<u8>>, CardListCacheError> {
        let mut conn = self.pool.get().await.map_err(map_run_error)?;
        redis::cmd("GET")
            .arg(key.as_str())
            .query_async::<Option<Vec<u8>>>(&mut *conn)
            .await
            .map_err(|err| map_redis_error(&err))
    }

    async fn put(
        &self,
        key: &CardListCacheKey,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), CardListCacheError> {
        let mut conn = self.pool.get().await.map_err(map_run_error)?;
        redis::cmd("SET")
            .arg(key.as_str())
            .arg(value)
            .arg("EX")
            .arg(ttl_seconds(ttl))
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|err| map_redis_error(&err))
    }
}
