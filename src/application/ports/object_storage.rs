use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::{
    CompletedObject, CompletedPart, MultipartUploadHandle, PresignTarget,
};
use crate::domain::value_objects::{BucketName, ObjectKey, UploadId};

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend answered with an error document
    #[error("Backend error {status} {code}: {message}")]
    Backend {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

impl StorageError {
    /// Backend error code (e.g. `NoSuchUpload`, `InvalidPart`) when one was reported
    pub fn code(&self) -> Option<&str> {
        match self {
            StorageError::Backend { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Port for the S3-compatible object store.
///
/// Implementations are shared read-only across all requests; every call is
/// independent and carries its own bucket and key.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Sign a time-limited URL for a single PUT against `target`
    async fn presign_url(
        &self,
        target: &PresignTarget,
        expires_in: Duration,
    ) -> Result<String, StorageError>;

    /// Start a multipart upload and return the backend-issued upload id
    async fn initiate_multipart_upload(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        content_type: &str,
    ) -> Result<UploadId, StorageError>;

    /// Ask the backend to assemble the listed parts into the final object
    async fn complete_multipart_upload(
        &self,
        upload: &MultipartUploadHandle,
        parts: &[CompletedPart],
    ) -> Result<CompletedObject, StorageError>;

    /// Discard a multipart upload and any parts stored for it
    async fn abort_multipart_upload(
        &self,
        upload: &MultipartUploadHandle,
    ) -> Result<(), StorageError>;
}
