use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dto::{CompleteMultipartUploadRequest, CompleteMultipartUploadResponse};
use crate::application::errors::UploadUseCaseError;
use crate::application::ports::ObjectStorage;
use crate::application::validation::{validate_object_location, validate_upload_id};
use crate::domain::entities::{CompletedPart, MultipartUploadHandle};
use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;
use crate::domain::value_objects::PartNumber;

/// Use case: Assemble previously uploaded parts into the final object
pub struct CompleteMultipartUploadUseCase {
    storage: Arc<dyn ObjectStorage>,
}

impl CompleteMultipartUploadUseCase {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Forward the part list unchanged (order included). Whether the parts
    /// exist and the ETags match is decided by the backend alone.
    pub async fn execute(
        &self,
        request: CompleteMultipartUploadRequest,
    ) -> Result<CompleteMultipartUploadResponse, UploadUseCaseError> {
        // 1. Validate the upload coordinates
        let (bucket, key) = validate_object_location(&request.bucket, &request.key)?;
        let upload_id = validate_upload_id(&request.upload_id)?;

        // 2. Validate the part list shape
        Validation::validate_not_empty_collection(&request.parts, "parts")?;
        let parts = request
            .parts
            .into_iter()
            .map(|part| CompletedPart::new(PartNumber::new(part.part_number)?, part.etag))
            .collect::<Result<Vec<_>, DomainError>>()?;

        let upload = MultipartUploadHandle::new(bucket, key, upload_id);

        // 3. Let the backend verify and assemble
        let object = self
            .storage
            .complete_multipart_upload(&upload, &parts)
            .await
            .map_err(|e| {
                warn!(
                    bucket = %upload.bucket(),
                    key = %upload.key(),
                    upload_id = %upload.upload_id(),
                    error = %e,
                    "multipart_completion_failed"
                );
                e
            })?;

        info!(
            bucket = %upload.bucket(),
            key = %upload.key(),
            upload_id = %upload.upload_id(),
            parts = parts.len(),
            "multipart_upload_completed"
        );

        Ok(CompleteMultipartUploadResponse::new(
            object,
            upload.upload_id().to_string(),
        ))
    }
}
