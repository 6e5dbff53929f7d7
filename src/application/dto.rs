use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{entities::CompletedObject, value_objects::ClientMethod};

/// DTO for presigned URL generation
///
/// With `upload_id` and a non-empty `part_numbers`, one URL per part is
/// returned in the same order; otherwise a single whole-object URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PresignedUrlRequest {
    #[validate(length(min = 1, message = "bucket cannot be empty"))]
    pub bucket: String,
    #[validate(length(min = 1, message = "key cannot be empty"))]
    pub key: String,
    pub client_method: ClientMethod,
    #[serde(default)]
    pub upload_id: Option<String>,
    #[serde(default)]
    pub part_numbers: Option<Vec<u32>>,
}

/// DTO for multipart upload initiation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateMultipartUploadRequest {
    #[validate(length(min = 1, message = "bucket cannot be empty"))]
    pub bucket: String,
    #[validate(length(min = 1, message = "key cannot be empty"))]
    pub key: String,
    /// Content type recorded on the final object (default: application/octet-stream)
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A single uploaded part as reported by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PartDto {
    #[validate(range(min = 1, max = 10000, message = "part_number must be in 1..=10000"))]
    pub part_number: u32,
    #[validate(length(min = 1, message = "etag cannot be empty"))]
    pub etag: String,
}

/// DTO for multipart upload completion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CompleteMultipartUploadRequest {
    #[validate(length(min = 1, message = "bucket cannot be empty"))]
    pub bucket: String,
    #[validate(length(min = 1, message = "key cannot be empty"))]
    pub key: String,
    #[validate(length(min = 1, message = "upload_id cannot be empty"))]
    pub upload_id: String,
    #[validate(length(min = 1, message = "parts cannot be empty"), nested)]
    pub parts: Vec<PartDto>,
}

/// DTO for multipart upload abort
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AbortMultipartUploadRequest {
    #[validate(length(min = 1, message = "bucket cannot be empty"))]
    pub bucket: String,
    #[validate(length(min = 1, message = "key cannot be empty"))]
    pub key: String,
    #[validate(length(min = 1, message = "upload_id cannot be empty"))]
    pub upload_id: String,
}

/// DTO for the object produced by a completed multipart upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompleteMultipartUploadResponse {
    pub bucket: String,
    pub key: String,
    pub upload_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl CompleteMultipartUploadResponse {
    pub fn new(object: CompletedObject, upload_id: String) -> Self {
        Self {
            bucket: object.bucket.into(),
            key: object.key.to_string(),
            upload_id,
            location: object.location,
            etag: object.etag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presign_request_optional_fields_default_to_none() {
        let request: PresignedUrlRequest = serde_json::from_str(
            r#"{"bucket":"b","key":"k","client_method":"put_object"}"#,
        )
        .unwrap();
        assert!(request.upload_id.is_none());
        assert!(request.part_numbers.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_presign_request_rejects_empty_bucket() {
        let request = PresignedUrlRequest {
            bucket: String::new(),
            key: "k".to_string(),
            client_method: ClientMethod::PutObject,
            upload_id: None,
            part_numbers: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("bucket"));
    }

    #[test]
    fn test_complete_request_validates_nested_parts() {
        let request = CompleteMultipartUploadRequest {
            bucket: "b".to_string(),
            key: "k".to_string(),
            upload_id: "U1".to_string(),
            parts: vec![PartDto {
                part_number: 0,
                etag: String::new(),
            }],
        };
        assert!(request.validate().is_err());

        let empty = CompleteMultipartUploadRequest {
            parts: vec![],
            ..request
        };
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("parts"));
    }

    #[test]
    fn test_complete_response_omits_missing_fields() {
        let response = CompleteMultipartUploadResponse {
            bucket: "b".to_string(),
            key: "k".to_string(),
            upload_id: "U1".to_string(),
            location: None,
            etag: Some("\"e-2\"".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("location").is_none());
        assert_eq!(json["etag"], "\"e-2\"");
    }
}
