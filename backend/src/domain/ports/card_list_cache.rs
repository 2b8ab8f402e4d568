//! Port for caching the raw upstream card list.
use std::time::Duration;

use async_trait::async_trait;

use super::{CardListCacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by card list cache adapters.
    pub enum CardListCacheError {
        /// Cache backend is unavailable, timing out, or returned an error reply.
        Backend { message: String } => "card list cache backend failure: {message}",
    }
}

/// Key-value store with per-entry expiry holding raw card list bytes.
///
/// A miss is `Ok(None)`. Any `Err` means the backend itself failed and must
/// not be confused with a miss.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardListCache: Send + Sync {
    /// Read the bytes stored under `key`, if present and not expired.
    async fn get(&self, key: &CardListCacheKey) -> Result<Option<Vec<u8>>, CardListCacheError>;

    /// Store `value` under `key`, replacing any previous entry, for `ttl`.
    async fn put(
        &self,
        key: &CardListCacheKey,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), CardListCacheError>;
}
