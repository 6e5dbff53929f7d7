use crate::domain::value_objects::{BucketName, ObjectKey, UploadId};

/// Reference to a multipart upload that exists on the storage backend.
///
/// Nothing about the upload's lifecycle is tracked here: the backend owns
/// the upload and decides whether the id is still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartUploadHandle {
    bucket: BucketName,
    key: ObjectKey,
    upload_id: UploadId,
}

impl MultipartUploadHandle {
    pub fn new(bucket: BucketName, key: ObjectKey, upload_id: UploadId) -> Self {
        Self {
            bucket,
            key,
            upload_id,
        }
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn key(&self) -> &ObjectKey {
        &self.key
    }

    pub fn upload_id(&self) -> &UploadId {
        &self.upload_id
    }
}
