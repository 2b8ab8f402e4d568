//! Driving port for the aggregated card list.

use async_trait::async_trait;

use crate::domain::{AggregatedCard, DomainError};

/// Domain use-case port for listing cards with their display configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardsQuery: Send + Sync {
    /// Fetch upstream cards (through the cache) and merge stored overrides.
    async fn list_cards(&self) -> Result<Vec<AggregatedCard>, DomainError>;
}
