//! Error type shared by the upload use cases
//!
//! Every use case either rejects its input before touching the backend or
//! forwards exactly one backend failure, so a single enum covers all of them.

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum UploadUseCaseError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<DomainError> for UploadUseCaseError {
    fn from(err: DomainError) -> Self {
        UploadUseCaseError::InvalidRequest(err.to_string())
    }
}
