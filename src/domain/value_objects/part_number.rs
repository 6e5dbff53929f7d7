use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// 1-based multipart part number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PartNumber(u32);

impl PartNumber {
    pub const MIN: u32 = 1;
    /// Highest part number S3 accepts in a single upload
    pub const MAX: u32 = 10_000;

    pub fn new(value: u32) -> Result<Self, DomainError> {
        Validation::validate_range(value, "part_number", Self::MIN, Self::MAX)
            .map_err(|e| DomainError::InvalidPartNumber(e.to_string()))?;
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PartNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PartNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartNumber> for u32 {
    fn from(part: PartNumber) -> Self {
        part.0
    }
}
