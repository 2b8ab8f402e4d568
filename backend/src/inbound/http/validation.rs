//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{CardId, DomainError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidUuid,
    InvalidBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Parse a card identifier taken from the request path.
///
/// Failures become `invalid_request` errors whose details name the field,
/// the rejected value and `invalid_uuid`.
pub(crate) fn parse_card_id(field: &str, raw: &str) -> Result<CardId, DomainError> {
    raw.parse::<CardId>().map_err(|_| {
        DomainError::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
            "field": field,
            "value": raw,
            "code": ValidationCode::InvalidUuid.as_str(),
        }))
    })
}

/// JSON extractor configuration returning the domain error envelope.
///
/// Body binding failures (wrong content type, malformed JSON, missing
/// fields) are reported as `400 invalid_request` before any handler runs.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        DomainError::invalid_request("request body is invalid")
            .with_details(json!({
                "reason": err.to_string(),
                "code": ValidationCode::InvalidBody.as_str(),
            }))
            .into()
    })
}
