use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("Invalid object key: {0}")]
    InvalidObjectKey(String),

    #[error("Invalid upload ID: {0}")]
    InvalidUploadId(String),

    #[error("Invalid part number: {0}")]
    InvalidPartNumber(String),

    #[error("Invalid ETag for part {part_number}: {message}")]
    InvalidETag { part_number: u32, message: String },

    #[error("Duplicate part number: {0}")]
    DuplicatePartNumber(u32),

    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },
}
