//! PostgreSQL-backed `CardConfigRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CardConfigRepository, CardConfigRepositoryError};
use crate::domain::{CardConfig, CardId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CardConfigRow, CardConfigUpdate, NewCardConfigRow};
use super::pool::{DbPool, PoolError};
use super::schema::card_configs;

/// Diesel-backed implementation of the [`CardConfigRepository`] port.
#[derive(Clone)]
pub struct DieselCardConfigRepository {
    pool: DbPool,
}

impl DieselCardConfigRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CardConfigRepositoryError {
    map_basic_pool_error(error, CardConfigRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CardConfigRepositoryError {
    map_basic_diesel_error(
        error,
        CardConfigRepositoryError::query,
        CardConfigRepositoryError::connection,
    )
}

#[async_trait]
impl CardConfigRepository for DieselCardConfigRepository {
    async fn find_by_id(
        &self,
        id: &CardId,
    ) -> Result<Option<CardConfig>, CardConfigRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CardConfigRow> = card_configs::table
            .filter(card_configs::id.eq(id.as_uuid()))
            .select(CardConfigRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(CardConfig::from))
    }

    async fn insert(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(card_configs::table)
            .values(NewCardConfigRow::from(config))
            .on_conflict(card_configs::id)
            .do_update()
            .set((
                card_configs::title.eq(excluded(card_configs::title)),
                card_configs::skin.eq(excluded(card_configs::skin)),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let target = card_configs::table.filter(card_configs::id.eq(config.id.as_uuid()));
        let updated = diesel::update(target)
            .set(CardConfigUpdate::from(config))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            debug!(card_id = %config.id, "card configuration update matched no rows");
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<CardConfig>, CardConfigRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CardConfigRow> = card_configs::table
            .select(CardConfigRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(CardConfig::from).collect())
    }
}
