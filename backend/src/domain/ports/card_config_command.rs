//! Driving port for card configuration updates.

use async_trait::async_trait;

use crate::domain::{CardConfig, CardId, DomainError};

/// Request payload for creating or replacing a card's display configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertCardConfigRequest {
    pub card_id: CardId,
    pub title: String,
    pub skin: String,
}

/// Domain use-case port for card configuration writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardConfigCommand: Send + Sync {
    /// Insert the configuration when absent, otherwise update it.
    ///
    /// Returns the configuration as supplied, keyed by `request.card_id`.
    async fn upsert(&self, request: UpsertCardConfigRequest) -> Result<CardConfig, DomainError>;
}
