use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// Validated bucket name as understood by S3-compatible backends
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketName(String);

impl BucketName {
    const MAX_LENGTH: usize = 63;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let to_domain = |e: DomainError| DomainError::InvalidBucketName(e.to_string());

        Validation::validate_not_empty(&value, "bucket").map_err(to_domain)?;
        Validation::validate_max_length(&value, "bucket", Self::MAX_LENGTH).map_err(to_domain)?;
        Validation::validate_bucket_charset(&value, "bucket").map_err(to_domain)?;

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BucketName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BucketName> for String {
    fn from(bucket: BucketName) -> Self {
        bucket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_bucket_is_accepted() {
        let bucket = BucketName::new("b").unwrap();
        assert_eq!(bucket.as_str(), "b");
    }

    #[test]
    fn test_empty_bucket_is_rejected() {
        let err = BucketName::new("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidBucketName(_)));
    }

    #[test]
    fn test_bucket_too_long() {
        assert!(BucketName::new("a".repeat(63)).is_ok());
        assert!(BucketName::new("a".repeat(64)).is_err());
    }

    #[test]
    fn test_bucket_with_slash_is_rejected() {
        assert!(BucketName::new("bucket/key").is_err());
    }

    #[test]
    fn test_bucket_deserialize_validates() {
        let ok: Result<BucketName, _> = serde_json::from_str("\"uploads\"");
        assert!(ok.is_ok());
        let bad: Result<BucketName, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
