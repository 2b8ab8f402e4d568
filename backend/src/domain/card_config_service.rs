//! Card configuration write path.
//!
//! A point lookup decides between insert and update. The repository's insert
//! tolerates a concurrent insert of the same id, so two racing first writes
//! both succeed with last-writer-wins semantics.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CardConfigCommand, CardConfigRepository, CardConfigRepositoryError, UpsertCardConfigRequest,
};
use crate::domain::{CardConfig, DomainError};

/// Service implementing [`CardConfigCommand`].
pub struct CardConfigService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for CardConfigService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> CardConfigService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
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

#[async_trait]
impl<R> CardConfigCommand for CardConfigService<R>
where
    R: CardConfigRepository + ?Sized,
{
    async fn upsert(&self, request: UpsertCardConfigRequest) -> Result<CardConfig, DomainError> {
        let UpsertCardConfigRequest {
            card_id,
            title,
            skin,
        } = request;
        let config = CardConfig::new(card_id, title, skin)
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let existing = self
            .repository
            .find_by_id(&config.id)
            .await
            .map_err(map_repository_error)?;

        if existing.is_some() {
            info!(card_id = %config.id, "updating existing card configuration");
            self.repository
                .update(&config)
                .await
                .map_err(map_repository_error)?;
        } else {
            info!(card_id = %config.id, "inserting new card configuration");
            self.repository
                .insert(&config)
                .await
                .map_err(map_repository_error)?;
        }
        Ok(config)
    }
}
