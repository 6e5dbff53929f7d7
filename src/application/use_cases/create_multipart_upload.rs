use std::sync::Arc;
use tracing::info;

use crate::application::dto::CreateMultipartUploadRequest;
use crate::application::errors::UploadUseCaseError;
use crate::application::ports::ObjectStorage;
use crate::application::validation::validate_object_location;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Use case: Start a multipart upload on the backend
pub struct CreateMultipartUploadUseCase {
    storage: Arc<dyn ObjectStorage>,
}

impl CreateMultipartUploadUseCase {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Returns the backend-issued upload id as an opaque string
    pub async fn execute(
        &self,
        request: CreateMultipartUploadRequest,
    ) -> Result<String, UploadUseCaseError> {
        let (bucket, key) = validate_object_location(&request.bucket, &request.key)?;
        let content_type = request
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let upload_id = self
            .storage
            .initiate_multipart_upload(&bucket, &key, content_type)
            .await?;

        info!(
            bucket = %bucket,
            key = %key,
            upload_id = %upload_id,
            "multipart_upload_created"
        );

        Ok(upload_id.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockObjectStorage, StorageError};
    use crate::domain::value_objects::UploadId;

    fn request(content_type: Option<&str>) -> CreateMultipartUploadRequest {
        CreateMultipartUploadRequest {
            bucket: "b".to_string(),
            key: "k".to_string(),
            content_type: content_type.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_returns_backend_upload_id() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_initiate_multipart_upload()
            .times(1)
            .withf(|bucket, key, content_type| {
                bucket.as_str() == "b" && key.as_str() == "k" && content_type == "video/mp4"
            })
            .returning(|_, _, _| Ok(UploadId::new("U1").unwrap()));

        let use_case = CreateMultipartUploadUseCase::new(Arc::new(storage));
        let upload_id = use_case.execute(request(Some("video/mp4"))).await.unwrap();

        assert_eq!(upload_id, "U1");
    }

    #[tokio::test]
    async fn test_content_type_defaults_to_octet_stream() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_initiate_multipart_upload()
            .times(2)
            .withf(|_, _, content_type| content_type == DEFAULT_CONTENT_TYPE)
            .returning(|_, _, _| Ok(UploadId::new("U1").unwrap()));

        let use_case = CreateMultipartUploadUseCase::new(Arc::new(storage));
        assert!(use_case.execute(request(None)).await.is_ok());
        assert!(use_case.execute(request(Some("  "))).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_key_rejected_before_backend() {
        let mut storage = MockObjectStorage::new();
        storage.expect_initiate_multipart_upload().never();

        let use_case = CreateMultipartUploadUseCase::new(Arc::new(storage));
        let mut req = request(None);
        req.key = String::new();

        assert!(matches!(
            use_case.execute(req).await,
            Err(UploadUseCaseError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_backend_failure_is_propagated() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_initiate_multipart_upload()
            .returning(|_, _, _| {
                Err(StorageError::Backend {
                    status: 404,
                    code: "NoSuchBucket".to_string(),
                    message: "The specified bucket does not exist".to_string(),
                })
            });

        let use_case = CreateMultipartUploadUseCase::new(Arc::new(storage));
        let err = use_case.execute(request(None)).await.unwrap_err();

        match err {
            UploadUseCaseError::Storage(e) => assert_eq!(e.code(), Some("NoSuchBucket")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
