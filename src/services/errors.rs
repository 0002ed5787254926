use thiserror::Error;

use crate::repository::errors::RepositoryError;
use crate::services::export::ExportError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage failure, passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("invalid fixture: {0}")]
    Fixture(String),

    #[error("operation was cancelled")]
    Cancelled,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
