use async_trait::async_trait;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::serde_types::Part;
use s3::Region;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::config::Config;
use crate::domain::entities::{
    CompletedObject, CompletedPart, MultipartUploadHandle, PresignTarget,
};
use crate::domain::value_objects::{BucketName, ObjectKey, UploadId};
use crate::infrastructure::storage::{parse_complete_result, parse_error_document};

/// `ObjectStorage` backed by an S3-compatible endpoint (AWS, MinIO, R2, ...).
///
/// Region and credentials are fixed at construction; a `Bucket` handle is
/// derived per call because every request names its own bucket.
pub struct S3ObjectStorage {
    region: Region,
    credentials: Credentials,
    path_style: bool,
}

impl S3ObjectStorage {
    pub fn new(region: Region, credentials: Credentials, path_style: bool) -> Self {
        Self {
            region,
            credentials,
            path_style,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            Some(&config.s3_access_key_id),
            Some(&config.s3_secret_access_key),
            config.s3_session_token.as_deref(),
            None,
            None,
        )
        .map_err(|e| StorageError::Signing(format!("invalid credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.s3_region.clone(),
            endpoint: config.s3_endpoint.trim_end_matches('/').to_string(),
        };

        Ok(Self::new(region, credentials, config.s3_path_style))
    }

    fn bucket(&self, name: &BucketName) -> Result<Box<Bucket>, StorageError> {
        let bucket = Bucket::new(name.as_str(), self.region.clone(), self.credentials.clone())
            .map_err(map_s3_error)?;

        Ok(if self.path_style {
            bucket.with_path_style()
        } else {
            bucket
        })
    }
}

/// Map a client error onto the port error, decoding S3 error documents
fn map_s3_error(err: S3Error) -> StorageError {
    match err {
        S3Error::HttpFailWithBody(status, body) => parse_error_document(status, &body),
        other => StorageError::Transport(other.to_string()),
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn presign_url(
        &self,
        target: &PresignTarget,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let expiry_secs = u32::try_from(expires_in.as_secs())
            .map_err(|_| StorageError::Signing("expiry out of range".to_string()))?;

        // UploadPart is a PUT on the object key with the part coordinates
        // as signed query parameters
        let queries = target.part_target().map(|part| {
            HashMap::from([
                ("partNumber".to_string(), part.part_number.to_string()),
                ("uploadId".to_string(), part.upload_id.to_string()),
            ])
        });

        let bucket = self.bucket(target.bucket())?;
        let url = bucket
            .presign_put(target.key().as_str(), expiry_secs, None, queries)
            .await
            .map_err(|e| StorageError::Signing(e.to_string()))?;

        debug!(
            bucket = %target.bucket(),
            key = %target.key(),
            method = %target.method(),
            "presigned"
        );
        Ok(url)
    }

    async fn initiate_multipart_upload(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        content_type: &str,
    ) -> Result<UploadId, StorageError> {
        let response = self
            .bucket(bucket)?
            .initiate_multipart_upload(key.as_str(), content_type)
            .await
            .map_err(map_s3_error)?;

        UploadId::new(response.upload_id)
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))
    }

    async fn complete_multipart_upload(
        &self,
        upload: &MultipartUploadHandle,
        parts: &[CompletedPart],
    ) -> Result<CompletedObject, StorageError> {
        let parts: Vec<Part> = parts
            .iter()
            .map(|part| Part {
                part_number: part.part_number().get(),
                etag: part.etag().to_string(),
            })
            .collect();

        let response = self
            .bucket(upload.bucket())?
            .complete_multipart_upload(upload.key().as_str(), upload.upload_id().as_str(), parts)
            .await
            .map_err(map_s3_error)?;

        let status = response.status_code();
        let body = String::from_utf8_lossy(response.as_slice());
        if !(200..300).contains(&status) {
            return Err(parse_error_document(status, &body));
        }

        let result = parse_complete_result(status, &body)?;
        Ok(CompletedObject {
            bucket: upload.bucket().clone(),
            key: upload.key().clone(),
            location: result.location,
            etag: result.etag,
        })
    }

    async fn abort_multipart_upload(
        &self,
        upload: &MultipartUploadHandle,
    ) -> Result<(), StorageError> {
        self.bucket(upload.bucket())?
            .abort_upload(upload.key().as_str(), upload.upload_id().as_str())
            .await
            .map_err(map_s3_error)
    }
}
