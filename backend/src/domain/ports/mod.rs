//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod card_config_command;
mod card_config_repository;
mod card_list_cache;
mod card_source;
mod cards_query;

pub use cache_key::CardListCacheKey;
#[cfg(test)]
pub use card_config_command::MockCardConfigCommand;
pub use card_config_command::{CardConfigCommand, UpsertCardConfigRequest};
#[cfg(test)]
pub use card_config_repository::MockCardConfigRepository;
pub use card_config_repository::{CardConfigRepository, CardConfigRepositoryError};
#[cfg(test)]
pub use card_list_cache::MockCardListCache;
pub use card_list_cache::{CardListCache, CardListCacheError};
#[cfg(test)]
pub use card_source::MockCardSource;
pub use card_source::{CardSource, CardSourceError};
#[cfg(test)]
pub use cards_query::MockCardsQuery;
pub use cards_query::CardsQuery;
