use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::application::dto::PresignedUrlRequest;
use crate::application::errors::UploadUseCaseError;
use crate::application::ports::ObjectStorage;
use crate::application::validation::validate_object_location;
use crate::domain::entities::PresignTarget;

/// Use case: Issue presigned upload URLs (whole object or one per part)
pub struct GeneratePresignedUrlsUseCase {
    storage: Arc<dyn ObjectStorage>,
    expires_in: Duration,
}

impl GeneratePresignedUrlsUseCase {
    pub fn new(storage: Arc<dyn ObjectStorage>, expires_in: Duration) -> Self {
        Self {
            storage,
            expires_in,
        }
    }

    /// Sign every requested URL in order. The first signing failure aborts
    /// the whole batch; no partial list is returned.
    pub async fn execute(
        &self,
        request: PresignedUrlRequest,
    ) -> Result<Vec<String>, UploadUseCaseError> {
        // 1. Validate location and expand into targets
        let (bucket, key) = validate_object_location(&request.bucket, &request.key)?;
        let targets = PresignTarget::plan(
            request.client_method,
            bucket,
            key,
            request.upload_id,
            request.part_numbers,
        )?;

        // 2. Sign sequentially so the output order matches the request
        let mut urls = Vec::with_capacity(targets.len());
        for target in &targets {
            let url = self
                .storage
                .presign_url(target, self.expires_in)
                .await
                .map_err(|e| {
                    warn!(
                        bucket = %target.bucket(),
                        key = %target.key(),
                        part_number = ?target.part_target().map(|p| p.part_number.get()),
                        error = %e,
                        "presign_failed"
                    );
                    e
                })?;
            debug!(bucket = %target.bucket(), key = %target.key(), "url_signed");
            urls.push(url);
        }

        info!(
            method = %request.client_method,
            count = urls.len(),
            expires_in_secs = self.expires_in.as_secs(),
            "presigned_urls_issued"
        );

        Ok(urls)
    }
}
