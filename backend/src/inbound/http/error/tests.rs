//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("relation \"animals\" does not exist")
        .with_path("/api/animals")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "sql": "SELECT 1" }))
}

async fn body_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(ErrorCode::ValidationError, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::BadRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::RequestTimeout, StatusCode::REQUEST_TIMEOUT)]
#[case(ErrorCode::Conflict, StatusCode::CONFLICT)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error_case: Error) {
    let response = ResponseError::error_response(&internal_error_case);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );

    let body = body_of(response).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["path"], "/api/animals");
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn recorded_time_survives_redaction(internal_error_case: Error) {
    let at = chrono::DateTime::parse_from_rfc3339("2025-11-05T09:00:00.250Z")
        .expect("valid timestamp")
        .to_utc();
    let response = ResponseError::error_response(&internal_error_case.with_occurred_at(at));

    let body = body_of(response).await;
    assert_eq!(body["timestamp"], "2025-11-05T09:00:00.250Z");
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn validation_errors_keep_their_details() {
    let error = Error::validation(
        &crate::domain::validation::ValidationErrors::from_messages([
            "Name is required and cannot be empty",
        ])
        .expect("non-empty"),
    )
    .with_path("/api/animals");

    let body = body_of(ResponseError::error_response(&error)).await;

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(
        body["details"],
        json!({ "errors": ["Name is required and cannot be empty"] })
    );
    assert!(body["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[actix_web::test]
async fn errors_without_trace_id_omit_the_header() {
    let response = ResponseError::error_response(&Error::conflict("taken"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
