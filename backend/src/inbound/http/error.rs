//! HTTP adapter mapping for domain errors.
//!
//! The domain error type stays HTTP-agnostic; this module turns it into a
//! status code plus the JSON envelope `{code, message, traceId?, details?}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{DomainError, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace messages that may carry infrastructure detail with a generic one.
///
/// Internal and unavailable errors keep their code and trace id; details are
/// dropped. Client errors pass through unchanged.
fn redact(error: &DomainError) -> DomainError {
    let generic = match error.code() {
        ErrorCode::InternalError => DomainError::internal("Internal server error"),
        ErrorCode::ServiceUnavailable => {
            DomainError::service_unavailable("Service temporarily unavailable")
        }
        ErrorCode::InvalidRequest => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => generic.with_trace_id(id.to_owned()),
        None => generic,
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self.trace_id().unwrap_or_default();
        match self.code() {
            ErrorCode::InternalError => error!(
                message = %self.message(),
                trace_id,
                "internal error returned to client"
            ),
            ErrorCode::ServiceUnavailable => warn!(
                message = %self.message(),
                trace_id,
                "dependency unavailable"
            ),
            ErrorCode::InvalidRequest => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact(self))
    }
}

impl From<actix_web::Error> for DomainError {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}
