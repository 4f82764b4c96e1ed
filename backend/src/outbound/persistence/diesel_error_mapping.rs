//! Translation of pool and Diesel failures into [`RepositoryError`].

use diesel::result::{DatabaseErrorKind, DatabaseErrorInformation, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors into connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = error.into_message();
    debug!(%message, "connection checkout failed");
    RepositoryError::connection(message)
}

/// Map Diesel errors into repository errors.
///
/// Unique violations become [`RepositoryError::Conflict`] naming the column
/// the constraint guards; closed connections become connection errors and
/// everything else a query error.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::conflict(conflict_field(&*info))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}

/// Column guarded by the violated constraint, falling back to `value`.
fn conflict_field(info: &dyn DatabaseErrorInformation) -> String {
    if let Some(column) = info.column_name() {
        return column.to_owned();
    }
    info.constraint_name()
        .and_then(|name| {
            name.strip_suffix("_key")
                .and_then(|stem| stem.split_once('_'))
                .map(|(_, column)| column.to_owned())
        })
        .unwrap_or_else(|| "value".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Info {
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("members")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info { constraint }))
    }

    #[rstest]
    #[case(Some("members_email_key"), "email")]
    #[case(None, "value")]
    fn unique_violations_name_the_column(#[case] constraint: Option<&'static str>, #[case] field: &str) {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation, constraint));
        assert_eq!(mapped, RepositoryError::conflict(field));
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let mapped = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection, None));
        assert!(matches!(mapped, RepositoryError::Connection { .. }));
    }

    #[rstest]
    fn other_failures_are_redacted_query_errors() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            RepositoryError::query("database error")
        );
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, RepositoryError::connection("timed out"));
    }
}
