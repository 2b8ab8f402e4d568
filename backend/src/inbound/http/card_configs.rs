//! Card configuration HTTP handler.
//!
//! ```text
//! PUT /card-configs/{cardId}
//! ```

use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CardConfig;
use crate::domain::ports::UpsertCardConfigRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_card_id;

/// Request payload for storing a card's display configuration.
///
/// `id` is accepted for compatibility with clients that echo the resource
/// back, but the path identifier always wins.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardConfigRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<serde_json::Value>,
    #[schema(example = "Travel")]
    pub title: String,
    #[schema(example = "ocean")]
    pub skin: String,
}

/// Stored configuration returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardConfigResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub title: String,
    pub skin: String,
}

impl From<CardConfig> for CardConfigResponse {
    fn from(value: CardConfig) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            skin: value.skin,
        }
    }
}

/// Create or replace the display configuration of a card.
#[utoipa::path(
    put,
    path = "/card-configs/{cardId}",
    description = "Insert the configuration when the card has none, otherwise update title and skin.",
    request_body = CardConfigRequest,
    params(
        ("cardId" = String, Path, description = "Card identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Stored configuration", body = CardConfigResponse),
        (status = 400, description = "Invalid card id or body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["card-configs"],
    operation_id = "upsertCardConfig"
)]
#[put("/card-configs/{card_id}")]
pub async fn upsert_card_config(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CardConfigRequest>,
) -> ApiResult<web::Json<CardConfigResponse>> {
    let card_id = parse_card_id("cardId", &path.into_inner())?;
    let CardConfigRequest { title, skin, .. } = payload.into_inner();

    let stored = state
        .card_configs
        .upsert(UpsertCardConfigRequest {
            card_id,
            title,
            skin,
        })
        .await?;

    Ok(web::Json(CardConfigResponse::from(stored)))
}
