use crate::domain::errors::DomainError;
use crate::domain::value_objects::PartNumber;

/// Part number and the ETag the backend returned when that part was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPart {
    part_number: PartNumber,
    etag: String,
}

impl CompletedPart {
    /// The ETag is passed through as-is (quotes included); only its presence
    /// is checked since the content it vouches for never passes through here.
    pub fn new(part_number: PartNumber, etag: impl Into<String>) -> Result<Self, DomainError> {
        let etag = etag.into();
        if etag.trim().is_empty() {
            return Err(DomainError::InvalidETag {
                part_number: part_number.get(),
                message: "ETag cannot be empty".to_string(),
            });
        }
        Ok(Self { part_number, etag })
    }

    pub fn part_number(&self) -> PartNumber {
        self.part_number
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_kept_verbatim() {
        let part = CompletedPart::new(PartNumber::new(3).unwrap(), "\"abc123\"").unwrap();
        assert_eq!(part.part_number().get(), 3);
        assert_eq!(part.etag(), "\"abc123\"");
    }

    #[test]
    fn test_empty_etag_rejected() {
        let err = CompletedPart::new(PartNumber::new(7).unwrap(), "").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidETag {
                part_number: 7,
                message: "ETag cannot be empty".to_string()
            }
        );
    }
}
