//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the JSON error envelope and a status
//! code. Internal failures are logged here and redacted before they leave the
//! process.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::Utc;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::envelope::ErrorEnvelope;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Status code for each error tag.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if !matches!(error.code(), ErrorCode::InternalError) {
        return error.clone();
    }
    error!(
        message = error.message(),
        path = error.path().unwrap_or_default(),
        trace_id = error.trace_id().unwrap_or_default(),
        "unexpected error"
    );
    let mut redacted = Error::internal(ErrorCode::InternalError.default_message());
    if let Some(path) = error.path() {
        redacted = redacted.with_path(path);
    }
    if let Some(id) = error.trace_id() {
        redacted = redacted.with_trace_id(id);
    }
    if let Some(at) = error.occurred_at() {
        redacted = redacted.with_occurred_at(at);
    }
    redacted
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        let at = self.occurred_at().unwrap_or_else(Utc::now);
        builder.json(ErrorEnvelope::from_error(&redact_if_internal(self), at))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests;
