//! Persistence errors shared by the resource repository ports.

use crate::domain::Error;

/// Errors raised by repository adapters.
///
/// Adapters convert driver failures into these variants once; the HTTP
/// layer only ever sees the domain [`Error`] produced by
/// [`RepositoryError::into_domain`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached or no connection was available.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },
    /// A write collided with a unique constraint on `field`.
    #[error("unique constraint violated on {field}")]
    Conflict { field: String },
}

impl RepositoryError {
    /// Connection failure carrying the driver message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query failure carrying the driver message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Unique-constraint violation on the named payload field.
    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
        }
    }

    /// Map onto the transport-agnostic domain error for `resource`.
    ///
    /// Connection and query failures become internal errors carrying the
    /// driver message; the HTTP adapter logs it and redacts it before
    /// responding.
    ///
    /// # Examples
    /// ```
    /// use shelter::domain::ErrorCode;
    /// use shelter::domain::ports::RepositoryError;
    ///
    /// let err = RepositoryError::conflict("email").into_domain("Member");
    /// assert_eq!(err.code(), ErrorCode::Conflict);
    /// assert_eq!(err.message(), "Member with this email already exists");
    /// ```
    pub fn into_domain(self, resource: &str) -> Error {
        match self {
            Self::Conflict { field } => {
                Error::conflict(format!("{resource} with this {field} already exists"))
            }
            other @ (Self::Connection { .. } | Self::Query { .. }) => {
                Error::internal(other.to_string())
            }
        }
    }
}
