//! Read path for the aggregated card list.
//!
//! The upstream body is cached under a single key. A hit skips the upstream
//! call entirely; a miss fetches, writes the raw bytes back, and only then
//! parses. Stored configurations are scanned on every request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CardConfigRepository, CardConfigRepositoryError, CardListCache, CardListCacheError,
    CardListCacheKey, CardSource, CardSourceError, CardsQuery,
};
use crate::domain::{AggregatedCard, DomainError, aggregate_cards, parse_card_list};

/// Lifetime of a cached card list entry.
pub const CARD_LIST_TTL: Duration = Duration::from_secs(10);

/// How a failed cache write after an upstream fetch is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheWritePolicy {
    /// Log the failure and serve the fetched cards anyway.
    #[default]
    BestEffort,
    /// Fail the request.
    Strict,
}

/// Service implementing [`CardsQuery`].
pub struct CardsService<S: ?Sized, C: ?Sized, R: ?Sized> {
    source: Arc<S>,
    cache: Arc<C>,
    configs: Arc<R>,
    write_policy: CacheWritePolicy,
}

impl<S: ?Sized, C: ?Sized, R: ?Sized> Clone for CardsService<S, C, R> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
            configs: Arc::clone(&self.configs),
            write_policy: self.write_policy,
        }
    }
}

impl<S: ?Sized, C: ?Sized, R: ?Sized> CardsService<S, C, R> {
    /// Create a service with the best-effort cache write policy.
    pub fn new(source: Arc<S>, cache: Arc<C>, configs: Arc<R>) -> Self {
        Self {
            source,
            cache,
            configs,
            write_policy: CacheWritePolicy::default(),
        }
    }

    /// Override the cache write policy.
    #[must_use]
    pub fn with_write_policy(mut self, write_policy: CacheWritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }
}

impl<S, C, R> CardsService<S, C, R>
where
    S: CardSource + ?Sized,
    C: CardListCache + ?Sized,
    R: CardConfigRepository + ?Sized,
{
    fn map_cache_error(error: CardListCacheError) -> DomainError {
        match error {
            CardListCacheError::Backend { message } => {
                DomainError::service_unavailable(format!("card list cache unavailable: {message}"))
            }
        }
    }

    fn map_source_error(error: CardSourceError) -> DomainError {
        DomainError::service_unavailable(format!("core banking system unavailable: {error}"))
    }

    fn map_repository_error(error: CardConfigRepositoryError) -> DomainError {
        match error {
            CardConfigRepositoryError::Connection { message } => DomainError::service_unavailable(
                format!("card config repository unavailable: {message}"),
            ),
            CardConfigRepositoryError::Query { message } => {
                DomainError::internal(format!("card config repository error: {message}"))
            }
        }
    }

    async fn card_list_bytes(&self) -> Result<Vec<u8>, DomainError> {
        let key = CardListCacheKey::card_list();
        if let Some(bytes) = self
            .cache
            .get(&key)
            .await
            .map_err(Self::map_cache_error)?
        {
            debug!(key = %key, "card list cache hit");
            return Ok(bytes);
        }

        info!(key = %key, "card list cache miss; fetching from core banking system");
        let bytes = self
            .source
            .fetch_cards()
            .await
            .map_err(Self::map_source_error)?;

        if let Err(error) = self.cache.put(&key, &bytes, CARD_LIST_TTL).await {
            match self.write_policy {
                CacheWritePolicy::BestEffort => {
                    warn!(key = %key, error = %error, "failed to populate card list cache");
                }
                CacheWritePolicy::Strict => return Err(Self::map_cache_error(error)),
            }
        }
        Ok(bytes)
    }
}

#[async_trait]
impl<S, C, R> CardsQuery for CardsService<S, C, R>
where
    S: CardSource + ?Sized,
    C: CardListCache + ?Sized,
    R: CardConfigRepository + ?Sized,
{
    async fn list_cards(&self) -> Result<Vec<AggregatedCard>, DomainError> {
        let bytes = self.card_list_bytes().await?;
        let cards = parse_card_list(&bytes)
            .map_err(|err| DomainError::internal(format!("malformed card list payload: {err}")))?;
        let configs = self
            .configs
            .list_all()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(aggregate_cards(cards, configs))
    }
}

#[cfg(test)]
#[path = "cards_service_tests.rs"]
mod tests;
