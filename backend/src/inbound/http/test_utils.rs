//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{MockCardConfigCommand, MockCardsQuery};
use crate::inbound::http::state::HttpState;

/// Wrap the given mocks in handler state.
pub fn mock_state(
    cards: MockCardsQuery,
    card_configs: MockCardConfigCommand,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(cards), Arc::new(card_configs)))
}
