//! Extractor configuration and the catch-all route.
//!
//! Malformed JSON bodies and query strings are rejected with a
//! `400 BAD_REQUEST` envelope instead of Actix's plain-text defaults.

use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::state::HttpState;

/// Message for bodies that are not valid JSON.
pub const MALFORMED_JSON: &str = "Request body must be valid JSON";
/// Message for query strings that cannot be decoded.
pub const MALFORMED_QUERY: &str = "Query string could not be parsed";
/// Message for unmatched routes.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// JSON extractor settings used by every body-accepting route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        debug!(error = %err, path = req.path(), "rejected request body");
        HttpState::reject_request(req, Error::bad_request(MALFORMED_JSON)).into()
    })
}

/// Decode a raw request body as JSON.
///
/// Used by routes that must check their path before looking at the body.
///
/// # Errors
///
/// Returns a `BAD_REQUEST` error carrying [`MALFORMED_JSON`].
pub fn json_body(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "rejected request body");
        Error::bad_request(MALFORMED_JSON)
    })
}

/// Query extractor settings used by listing routes.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        debug!(error = %err, path = req.path(), "rejected query string");
        HttpState::reject_request(req, Error::bad_request(MALFORMED_QUERY)).into()
    })
}

/// Default service answering unmatched routes with a 404 envelope.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpState::reject_request(&req, Error::not_found(ENDPOINT_NOT_FOUND)).error_response()
}
