//! Errors raised by the storage layer.
//!
//! Services surface these unchanged: a failed list read is an infrastructure
//! failure, never a business outcome.

use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => RepositoryError::ConstraintViolation(
                        format!("Unique constraint violation: {message}"),
                    ),
                    DatabaseErrorKind::ForeignKeyViolation => RepositoryError::ConstraintViolation(
                        format!("Foreign key constraint violation: {message}"),
                    ),
                    DatabaseErrorKind::NotNullViolation => RepositoryError::ConstraintViolation(
                        format!("Not null constraint violation: {message}"),
                    ),
                    DatabaseErrorKind::ClosedConnection => {
                        RepositoryError::ConnectionError(message)
                    }
                    _ => RepositoryError::DatabaseError(message),
                }
            }

            DieselError::DeserializationError(e) => {
                RepositoryError::InvalidData(format!("Deserialization error: {e}"))
            }

            DieselError::SerializationError(e) => {
                RepositoryError::InvalidData(format!("Serialization error: {e}"))
            }

            _ => RepositoryError::DatabaseError(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollback_maps_to_database_error() {
        let err: RepositoryError = DieselError::RollbackTransaction.into();
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }

    #[test]
    fn deserialization_maps_to_invalid_data() {
        let err: RepositoryError = DieselError::DeserializationError("bad row".into()).into();
        match err {
            RepositoryError::InvalidData(message) => assert!(message.contains("bad row")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
