//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = DomainError::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "bad");
}

#[rstest]
#[case(ErrorCode::ServiceUnavailable, DomainError::service_unavailable("down"))]
#[case(ErrorCode::InternalError, DomainError::internal("boom"))]
fn convenience_constructors_set_codes(#[case] code: ErrorCode, #[case] error: DomainError) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = DomainError::invalid_request("bad").try_with_trace_id("   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = DomainError::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { DomainError::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialised_errors_ignore_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let payload = json!({ "code": "service_unavailable", "message": "down" });

    let error: DomainError = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("payload deserialises")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_payload(expected_trace_id: String) {
    let error = DomainError::invalid_request("bad")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "title" }));

    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["message"], "bad");
    assert_eq!(value["traceId"], expected_trace_id.as_str());
    assert_eq!(value["details"]["field"], "title");
}

#[rstest]
fn serialisation_omits_absent_optional_fields() {
    let value = serde_json::to_value(DomainError::internal("boom")).expect("error serialises");
    let object = value.as_object().expect("object payload");
    assert!(!object.contains_key("traceId"));
    assert!(!object.contains_key("details"));
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result: Result<DomainError, _> =
        serde_json::from_value(json!({ "code": "internal_error", "message": " " }));
    assert!(result.is_err());
}
