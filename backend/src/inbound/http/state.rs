//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they can be tested with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{CardConfigCommand, CardsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub cards: Arc<dyn CardsQuery>,
    pub card_configs: Arc<dyn CardConfigCommand>,
}

impl HttpState {
    /// Bundle the card list query and the configuration command.
    pub fn new(cards: Arc<dyn CardsQuery>, card_configs: Arc<dyn CardConfigCommand>) -> Self {
        Self {
            cards,
            card_configs,
        }
    }
}
