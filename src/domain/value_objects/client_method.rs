use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage operation a presigned URL is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClientMethod {
    /// Whole-object upload
    PutObject,
    /// Upload of a single part of a multipart upload
    UploadPart,
}

impl std::fmt::Display for ClientMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientMethod::PutObject => write!(f, "put_object"),
            ClientMethod::UploadPart => write!(f, "upload_part"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_method_wire_names() {
        let method: ClientMethod = serde_json::from_str("\"upload_part\"").unwrap();
        assert_eq!(method, ClientMethod::UploadPart);
        assert_eq!(
            serde_json::to_string(&ClientMethod::PutObject).unwrap(),
            "\"put_object\""
        );
    }

    #[test]
    fn test_unknown_client_method_is_rejected() {
        assert!(serde_json::from_str::<ClientMethod>("\"get_object\"").is_err());
        assert!(serde_json::from_str::<ClientMethod>("\"PUT_OBJECT\"").is_err());
    }
}
