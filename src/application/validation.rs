//! Common validation utilities for use cases

use crate::application::errors::UploadUseCaseError;
use crate::domain::value_objects::{BucketName, ObjectKey, UploadId};

/// Validate the bucket/key pair every operation addresses
pub fn validate_object_location(
    bucket: &str,
    key: &str,
) -> Result<(BucketName, ObjectKey), UploadUseCaseError> {
    let bucket = BucketName::new(bucket)?;
    let key = ObjectKey::new(key)?;
    Ok((bucket, key))
}

/// Validate the upload id a part or completion request refers to
pub fn validate_upload_id(upload_id: &str) -> Result<UploadId, UploadUseCaseError> {
    Ok(UploadId::new(upload_id)?)
}
