//! Common validation utilities for domain objects
//!
//! Value objects delegate their field checks here so that the error
//! wording stays consistent across bucket, key and upload identifiers.

use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::errors::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted in bucket names by S3-compatible backends,
/// including the legacy uppercase/underscore forms MinIO still serves.
static BUCKET_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid bucket name regex"));

/// Validation result type
pub type ValidationResult<T> = Result<T, DomainError>;

/// Common validation utilities
pub struct Validation;

impl Validation {
    /// Validate that a string is not empty or whitespace
    pub fn validate_not_empty(value: &str, field_name: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Field cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate an upper bound on the byte length of a string
    pub fn validate_max_length(value: &str, field_name: &str, max: usize) -> ValidationResult<()> {
        if value.len() > max {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: format!("Field must be at most {} bytes long", max),
            });
        }
        Ok(())
    }

    /// Validate the character set of a bucket name
    pub fn validate_bucket_charset(value: &str, field_name: &str) -> ValidationResult<()> {
        if !BUCKET_NAME_REGEX.is_match(value) {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Field can only contain letters, digits, '.', '-' and '_'".to_string(),
            });
        }
        Ok(())
    }

    /// Validate that a value is within an inclusive numeric range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        field_name: &str,
        min: T,
        max: T,
    ) -> ValidationResult<()> {
        if value < min || value > max {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: format!("Value {} is outside {}..={}", value, min, max),
            });
        }
        Ok(())
    }

    /// Validate that a collection is not empty
    pub fn validate_not_empty_collection<T>(
        collection: &[T],
        field_name: &str,
    ) -> ValidationResult<()> {
        if collection.is_empty() {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Collection cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Return the first item that occurs more than once, if any
    pub fn first_duplicate<T: Eq + Hash + Copy>(items: impl IntoIterator<Item = T>) -> Option<T> {
        let mut seen = HashSet::new();
        items.into_iter().find(|item| !seen.insert(*item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(Validation::validate_not_empty("bucket", "bucket").is_ok());
        assert!(Validation::validate_not_empty("", "bucket").is_err());
        assert!(Validation::validate_not_empty("   ", "bucket").is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(Validation::validate_max_length("abc", "key", 3).is_ok());
        let err = Validation::validate_max_length("abcd", "key", 3).unwrap_err();
        assert!(err.to_string().contains("at most 3 bytes"));
    }

    #[test]
    fn test_validate_bucket_charset() {
        assert!(Validation::validate_bucket_charset("my-bucket.v2_x", "bucket").is_ok());
        assert!(Validation::validate_bucket_charset("has space", "bucket").is_err());
        assert!(Validation::validate_bucket_charset("a/b", "bucket").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(Validation::validate_range(1u32, "part_number", 1, 10_000).is_ok());
        assert!(Validation::validate_range(10_000u32, "part_number", 1, 10_000).is_ok());
        assert!(Validation::validate_range(0u32, "part_number", 1, 10_000).is_err());
        assert!(Validation::validate_range(10_001u32, "part_number", 1, 10_000).is_err());
    }

    #[test]
    fn test_validate_not_empty_collection() {
        let empty: Vec<u32> = vec![];
        assert!(Validation::validate_not_empty_collection(&empty, "parts").is_err());
        assert!(Validation::validate_not_empty_collection(&[1], "parts").is_ok());
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(Validation::first_duplicate([1, 2, 3]), None);
        assert_eq!(Validation::first_duplicate([1, 2, 1, 2]), Some(1));
    }
}
