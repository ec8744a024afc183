//! Diesel and pool error mapping onto [`RepositoryError`].

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    RepositoryError::connection(error.into_message())
}

/// Map Diesel errors, keeping driver detail in the debug log only.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            RepositoryError::query("check constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            RepositoryError::query("foreign key violated")
        }
        _ => RepositoryError::query("database error"),
    }
}

/// Stored counters are non-negative `INTEGER` columns.
pub(crate) fn counter_from_column(value: i32, column: &str) -> Result<u32, RepositoryError> {
    u32::try_from(value)
        .map_err(|_| RepositoryError::query(format!("{column} is negative: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct StubInfo;

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "stub"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo))
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, RepositoryError::connection("timed out"));
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection),
        RepositoryError::connection("database connection error")
    )]
    #[case(
        database_error(DatabaseErrorKind::CheckViolation),
        RepositoryError::query("check constraint violated")
    )]
    #[case(DieselError::NotFound, RepositoryError::query("record not found"))]
    #[case(
        database_error(DatabaseErrorKind::UniqueViolation),
        RepositoryError::query("database error")
    )]
    fn diesel_errors_map_by_kind(#[case] error: DieselError, #[case] expected: RepositoryError) {
        assert_eq!(map_diesel_error(error), expected);
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(7, Some(7))]
    #[case(-1, None)]
    fn counters_must_be_non_negative(#[case] value: i32, #[case] expected: Option<u32>) {
        assert_eq!(counter_from_column(value, "bookmark_count").ok(), expected);
    }
}
