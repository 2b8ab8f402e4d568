//! Port for card configuration persistence.
//!
//! One row per card id. Rows are created or replaced, never deleted.

use async_trait::async_trait;

use crate::domain::{CardConfig, CardId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by card configuration repository adapters.
    pub enum CardConfigRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "card config repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "card config repository query failed: {message}",
    }
}

/// Port for card configuration storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardConfigRepository: Send + Sync {
    /// Point lookup by card id. `None` when no configuration is stored.
    async fn find_by_id(
        &self,
        id: &CardId,
    ) -> Result<Option<CardConfig>, CardConfigRepositoryError>;

    /// Insert a new configuration.
    ///
    /// Adapters resolve a concurrent insert of the same id by overwriting the
    /// existing row instead of failing on the primary key.
    async fn insert(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError>;

    /// Replace the title and skin of an existing configuration.
    async fn update(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError>;

    /// Return every stored configuration.
    async fn list_all(&self) -> Result<Vec<CardConfig>, CardConfigRepositoryError>;
}
