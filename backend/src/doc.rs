//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every inbound HTTP path plus the error envelope
//! schemas defined in [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is printed by `cargo run --bin
//! openapi-dump`.

use crate::inbound::http::card_configs::{CardConfigRequest, CardConfigResponse};
use crate::inbound::http::cards::CardResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card aggregator API",
        description = "Cards from the core banking system merged with locally stored display configuration."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cards::list_cards,
        crate::inbound::http::card_configs::upsert_card_config,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CardResponse,
        CardConfigRequest,
        CardConfigResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "cards", description = "Aggregated card listing"),
        (name = "card-configs", description = "Card display configuration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
