mod s3_object_storage;
mod s3_response;

pub use s3_object_storage::S3ObjectStorage;
pub use s3_response::{parse_complete_result, parse_error_document, CompleteResult};
