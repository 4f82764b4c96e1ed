//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and the JSON error envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::TraceId;
use crate::domain::validation::ValidationErrors;

/// Stable machine-readable error tag describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A payload, filter or identifier failed field validation.
    ValidationError,
    /// The request could not be decoded at all (malformed JSON, bad query).
    BadRequest,
    /// The resource or route does not exist.
    NotFound,
    /// The write collides with a unique constraint.
    Conflict,
    /// The handler did not finish within the request timeout.
    RequestTimeout,
    /// An unexpected failure inside the service.
    InternalError,
}

impl ErrorCode {
    /// Message used when a constructor is handed a blank message.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Not found",
            Self::Conflict => "Conflict",
            Self::RequestTimeout => "Request timed out",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use shelter::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Animal not found").with_path("/api/animals/7");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.path(), Some("/api/animals/7"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
    path: Option<String>,
    trace_id: Option<String>,
    occurred_at: Option<DateTime<Utc>>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty after trimming.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, substituting the code's default message when the
    /// supplied one is blank.
    ///
    /// Captures the current trace identifier if one is in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|_| Self::build(code, code.default_message().to_owned()))
    }

    /// Fallible constructor that validates the message content.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorValidationError::EmptyMessage`] for blank messages.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::build(code, message))
    }

    fn build(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            path: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
            occurred_at: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Request path the error was raised for, if known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Trace identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// When the error was raised, if the raising adapter recorded it.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.occurred_at
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Record the request path the error belongs to.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Record when the error was raised.
    pub fn with_occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Build a [`ErrorCode::ValidationError`] from collected field messages.
    ///
    /// The message joins every field message with `"; "` and the details
    /// carry the ordered list under `errors`.
    ///
    /// # Examples
    /// ```
    /// use shelter::domain::Error;
    /// use shelter::domain::validation::ValidationErrors;
    ///
    /// let errors = ValidationErrors::from_messages(["a", "b"]).expect("non-empty");
    /// let err = Error::validation(&errors);
    /// assert_eq!(err.message(), "a; b");
    /// ```
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self::new(ErrorCode::ValidationError, errors.joined())
            .with_details(json!({ "errors": errors.messages() }))
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::RequestTimeout`].
    pub fn request_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequestTimeout, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
