use std::sync::Arc;
use tracing::info;

use crate::application::dto::AbortMultipartUploadRequest;
use crate::application::errors::UploadUseCaseError;
use crate::application::ports::ObjectStorage;
use crate::application::validation::{validate_object_location, validate_upload_id};
use crate::domain::entities::MultipartUploadHandle;

/// Use case: Abandon a multipart upload so the backend drops its parts
pub struct AbortMultipartUploadUseCase {
    storage: Arc<dyn ObjectStorage>,
}

impl AbortMultipartUploadUseCase {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn execute(
        &self,
        request: AbortMultipartUploadRequest,
    ) -> Result<(), UploadUseCaseError> {
        let (bucket, key) = validate_object_location(&request.bucket, &request.key)?;
        let upload_id = validate_upload_id(&request.upload_id)?;
        let upload = MultipartUploadHandle::new(bucket, key, upload_id);

        self.storage.abort_multipart_upload(&upload).await?;

        info!(
            bucket = %upload.bucket(),
            key = %upload.key(),
            upload_id = %upload.upload_id(),
            "multipart_upload_aborted"
        );
        Ok(())
    }
}
