//! Builders wiring outbound adapters into domain services and HTTP state.

use std::sync::Arc;

use actix_web::web;

use card_aggregator::domain::{CardConfigService, CardsService};
use card_aggregator::inbound::http::state::HttpState;
use card_aggregator::outbound::persistence::DieselCardConfigRepository;

use super::ServerConfig;

/// Build the handler state from the shared infrastructure handles.
///
/// Both services share one repository instance over the same pool.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(DieselCardConfigRepository::new(config.db_pool.clone()));

    let cards = CardsService::new(
        Arc::clone(&config.source),
        Arc::clone(&config.cache),
        Arc::clone(&repository),
    )
    .with_write_policy(config.write_policy);
    let card_configs = CardConfigService::new(repository);

    web::Data::new(HttpState::new(Arc::new(cards), Arc::new(card_configs)))
}
