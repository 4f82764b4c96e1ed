//! Response envelopes shared by every JSON endpoint.
//!
//! ```text
//! { "success": true,  "data": …, "message": "…", "timestamp": "…" }
//! { "success": true,  "data": [ … ], "pagination": { … }, "timestamp": "…" }
//! { "success": false, "error": "TAG", "message": "…", "path": "…", "timestamp": "…" }
//! ```
//!
//! Timestamps are ISO-8601 UTC with millisecond precision.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use pagination::{PageMeta, PageRequest};
use serde::Serialize;
use serde_json::Value;

use crate::domain::timestamp::format_millis;
use crate::domain::{Error, ErrorCode};

/// Single-resource success envelope.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    timestamp: String,
}

impl<T: Serialize> DataEnvelope<T> {
    /// Wrap `data`, optionally with a human message.
    pub fn new(data: T, message: Option<&'static str>, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            message,
            timestamp: format_millis(&at),
        }
    }
}

/// Paginated list envelope.
#[derive(Debug, Serialize)]
pub struct PageEnvelope<T> {
    success: bool,
    data: Vec<T>,
    pagination: PageMeta,
    timestamp: String,
}

impl<T: Serialize> PageEnvelope<T> {
    /// Wrap one page of `data` with metadata derived from `request` and
    /// `total`.
    pub fn new(data: Vec<T>, request: PageRequest, total: u64, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            pagination: PageMeta::new(request, total),
            timestamp: format_millis(&at),
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    success: bool,
    error: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    timestamp: String,
}

impl ErrorEnvelope {
    /// Project a domain error into its wire shape.
    pub fn from_error(error: &Error, at: DateTime<Utc>) -> Self {
        Self {
            success: false,
            error: error.code(),
            message: error.message().to_owned(),
            details: error.details().cloned(),
            path: error.path().map(str::to_owned),
            timestamp: format_millis(&at),
        }
    }
}

/// `200 OK` with a data envelope.
pub fn ok<T: Serialize>(data: T, message: Option<&'static str>, at: DateTime<Utc>) -> HttpResponse {
    respond(StatusCode::OK, &DataEnvelope::new(data, message, at))
}

/// `201 Created` with a data envelope.
pub fn created<T: Serialize>(data: T, message: &'static str, at: DateTime<Utc>) -> HttpResponse {
    respond(StatusCode::CREATED, &DataEnvelope::new(data, Some(message), at))
}

/// `200 OK` with a paginated envelope.
pub fn paginated<T: Serialize>(
    data: Vec<T>,
    request: PageRequest,
    total: u64,
    at: DateTime<Utc>,
) -> HttpResponse {
    respond(StatusCode::OK, &PageEnvelope::new(data, request, total, at))
}

/// `204 No Content` with an empty body.
pub fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn respond<B: Serialize>(status: StatusCode, body: &B) -> HttpResponse {
    HttpResponse::build(status).json(body)
}
