use crate::domain::value_objects::{BucketName, ObjectKey};

/// Object assembled by the backend after a successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedObject {
    pub bucket: BucketName,
    pub key: ObjectKey,
    pub location: Option<String>,
    pub etag: Option<String>,
}
