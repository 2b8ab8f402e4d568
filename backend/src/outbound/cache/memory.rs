//! Process-local card list cache.
//!
//! Entries carry an absolute expiry taken from the injected clock. Expired
//! entries read as misses and are dropped lazily on the next lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{CardListCache, CardListCacheError, CardListCacheKey};

struct Entry {
    value: Vec<u8>,
    expires_at: DateTime<Utc>,
}

/// In-memory card list cache for single-instance deployments and tests.
pub struct InMemoryCardListCache {
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<CardListCacheKey, Entry>>,
}

impl InMemoryCardListCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock_entries(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<CardListCacheKey, Entry>>, CardListCacheError> {
        self.entries
            .lock()
            .map_err(|_| CardListCacheError::backend("in-memory cache lock poisoned"))
    }
}

#[async_trait]
impl CardListCache for InMemoryCardListCache {
    async fn get(&self, key: &CardListCacheKey) -> Result<Option<Vec<u8>>, CardListCacheError> {
        let now = self.clock.utc();
        let mut entries = self.lock_entries()?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        key: &CardListCacheKey,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), CardListCacheError> {
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|err| CardListCacheError::backend(format!("invalid cache ttl: {err}")))?;
        let expires_at = self.clock.utc() + ttl;
        self.lock_entries()?.insert(
            key.clone(),
            Entry {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }
}
