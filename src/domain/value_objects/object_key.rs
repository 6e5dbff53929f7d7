use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// Object key inside a bucket (UTF-8, at most 1024 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    const MAX_LENGTH: usize = 1024;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let to_domain = |e: DomainError| DomainError::InvalidObjectKey(e.to_string());

        Validation::validate_not_empty(&value, "key").map_err(to_domain)?;
        Validation::validate_max_length(&value, "key", Self::MAX_LENGTH).map_err(to_domain)?;

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_key_is_accepted() {
        let key = ObjectKey::new("videos/2024/clip.mp4").unwrap();
        assert_eq!(key.as_str(), "videos/2024/clip.mp4");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            ObjectKey::new(""),
            Err(DomainError::InvalidObjectKey(_))
        ));
        assert!(ObjectKey::new("  ").is_err());
    }

    #[test]
    fn test_key_length_is_measured_in_bytes() {
        // 'é' is two bytes in UTF-8
        assert!(ObjectKey::new("é".repeat(512)).is_ok());
        assert!(ObjectKey::new("é".repeat(513)).is_err());
    }
}
