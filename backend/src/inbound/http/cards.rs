//! Card list HTTP handler.
//!
//! ```text
//! GET /cards
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AggregatedCard;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Card as returned to clients: upstream fields plus display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "4000 1234 5678 9010")]
    pub number: String,
    #[schema(example = "04")]
    pub expiration_month: String,
    #[schema(example = "2027")]
    pub expiration_year: String,
    #[schema(example = "EUR")]
    pub currency: String,
    #[schema(example = "My favorite card")]
    pub title: String,
    #[schema(example = "default_skin")]
    pub skin: String,
}

impl From<AggregatedCard> for CardResponse {
    fn from(value: AggregatedCard) -> Self {
        Self {
            id: value.id.to_string(),
            number: value.number,
            expiration_month: value.expiration_month,
            expiration_year: value.expiration_year,
            currency: value.currency,
            title: value.title,
            skin: value.skin,
        }
    }
}

/// List every upstream card with its title and skin.
#[utoipa::path(
    get,
    path = "/cards",
    description = "Fetch cards from the core banking system (cached for 10 seconds) and merge stored display configuration.",
    responses(
        (status = 200, description = "Cards in upstream order", body = [CardResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "A dependency is unavailable", body = ErrorSchema)
    ),
    tags = ["cards"],
    operation_id = "listCards"
)]
#[get("/cards")]
pub async fn list_cards(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CardResponse>>> {
    let cards = state.cards.list_cards().await?;
    Ok(web::Json(cards.into_iter().map(CardResponse::from).collect()))
}
