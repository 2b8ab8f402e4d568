//! Domain primitives, services, and ports.
//!
//! Public surface:
//! - `DomainError` / `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request correlation identifier held in task-local storage.
//! - Card types (`CardId`, `UpstreamCard`, `CardConfig`, `AggregatedCard`)
//!   and the pure `aggregate_cards` merge.
//! - `CardsService` / `CardConfigService`: implementations of the driving
//!   ports in [`ports`].

pub mod aggregation;
pub mod card;
pub mod card_config_service;
pub mod cards_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::aggregation::aggregate_cards;
pub use self::card::{
    AggregatedCard, CardConfig, CardConfigValidationError, CardId, DEFAULT_SKIN, DEFAULT_TITLE,
    MAX_DISPLAY_FIELD_CHARS, UpstreamCard, parse_card_list,
};
pub use self::card_config_service::CardConfigService;
pub use self::cards_service::{CARD_LIST_TTL, CacheWritePolicy, CardsService};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
