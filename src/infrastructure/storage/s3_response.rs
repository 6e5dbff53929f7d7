//! Decoding of the XML documents an S3-compatible backend answers with

use serde::Deserialize;

use crate::application::ports::StorageError;

/// `<Error>` document returned on failed requests
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorDocument {
    code: String,
    #[serde(default)]
    message: Option<String>,
}

/// `<CompleteMultipartUploadResult>` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompleteResult {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(rename = "ETag", default)]
    pub etag: Option<String>,
}

/// Turn a failed response into a `StorageError::Backend`.
///
/// Bodies that are not an S3 error document (proxies, empty HEAD-style
/// answers) keep the raw text as the message with a generic code.
pub fn parse_error_document(status: u16, body: &str) -> StorageError {
    match quick_xml::de::from_str::<ErrorDocument>(body) {
        Ok(doc) => StorageError::Backend {
            status,
            code: doc.code,
            message: doc.message.unwrap_or_default(),
        },
        Err(_) => StorageError::Backend {
            status,
            code: "UnknownError".to_string(),
            message: body.trim().to_string(),
        },
    }
}

/// Decode the completion answer.
///
/// S3 may report a failed completion with HTTP 200 and an `<Error>` body, so
/// the error document is checked before the result document.
pub fn parse_complete_result(status: u16, body: &str) -> Result<CompleteResult, StorageError> {
    if let Ok(doc) = quick_xml::de::from_str::<ErrorDocument>(body) {
        return Err(StorageError::Backend {
            status,
            code: doc.code,
            message: doc.message.unwrap_or_default(),
        });
    }

    if body.trim().is_empty() {
        return Ok(CompleteResult::default());
    }

    quick_xml::de::from_str::<CompleteResult>(body)
        .map_err(|e| StorageError::InvalidResponse(format!("completion result: {}", e)))
}
