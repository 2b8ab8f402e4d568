//! Internal Diesel row structs for the `card_configs` table.
//!
//! These never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{CardConfig, CardId};

use super::schema::card_configs;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = card_configs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CardConfigRow {
    pub id: Uuid,
    pub title: String,
    pub skin: String,
}

impl From<CardConfigRow> for CardConfig {
    fn from(row: CardConfigRow) -> Self {
        Self {
            id: CardId::from_uuid(row.id),
            title: row.title,
            skin: row.skin,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = card_configs)]
pub(crate) struct NewCardConfigRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub skin: &'a str,
}

impl<'a> From<&'a CardConfig> for NewCardConfigRow<'a> {
    fn from(config: &'a CardConfig) -> Self {
        Self {
            id: *config.id.as_uuid(),
            title: config.title.as_str(),
            skin: config.skin.as_str(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = card_configs)]
pub(crate) struct CardConfigUpdate<'a> {
    pub title: &'a str,
    pub skin: &'a str,
}

impl<'a> From<&'a CardConfig> for CardConfigUpdate<'a> {
    fn from(config: &'a CardConfig) -> Self {
        Self {
            title: config.title.as_str(),
            skin: config.skin.as_str(),
        }
    }
}
