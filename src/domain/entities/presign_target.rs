use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;
use crate::domain::value_objects::{BucketName, ClientMethod, ObjectKey, PartNumber, UploadId};

/// Part coordinates embedded in an `upload_part` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTarget {
    pub upload_id: UploadId,
    pub part_number: PartNumber,
}

/// One URL to be signed: a single method against a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignTarget {
    method: ClientMethod,
    bucket: BucketName,
    key: ObjectKey,
    part: Option<PartTarget>,
}

impl PresignTarget {
    pub fn whole_object(bucket: BucketName, key: ObjectKey) -> Self {
        Self {
            method: ClientMethod::PutObject,
            bucket,
            key,
            part: None,
        }
    }

    pub fn part(bucket: BucketName, key: ObjectKey, part: PartTarget) -> Self {
        Self {
            method: ClientMethod::UploadPart,
            bucket,
            key,
            part: Some(part),
        }
    }

    /// Expand a presign request into the ordered list of URLs to sign.
    ///
    /// With both an upload id and a non-empty part list, one target per part
    /// number is produced in the order given. Otherwise a single whole-object
    /// target is produced. `upload_part` requires the part coordinates, and
    /// `put_object` refuses them.
    pub fn plan(
        method: ClientMethod,
        bucket: BucketName,
        key: ObjectKey,
        upload_id: Option<String>,
        part_numbers: Option<Vec<u32>>,
    ) -> Result<Vec<Self>, DomainError> {
        let upload_id = upload_id.filter(|id| !id.trim().is_empty());
        let part_numbers = part_numbers.filter(|parts| !parts.is_empty());

        let (upload_id, part_numbers) = match (method, upload_id, part_numbers) {
            (ClientMethod::UploadPart, Some(id), Some(parts)) => (id, parts),
            (ClientMethod::UploadPart, _, _) => {
                return Err(DomainError::ValidationError {
                    field: "upload_id".to_string(),
                    message: "upload_part requires both upload_id and part_numbers".to_string(),
                });
            }
            (ClientMethod::PutObject, Some(_), Some(_)) => {
                return Err(DomainError::ValidationError {
                    field: "client_method".to_string(),
                    message: "part_numbers with upload_id require client_method upload_part"
                        .to_string(),
                });
            }
            (ClientMethod::PutObject, _, _) => {
                return Ok(vec![Self::whole_object(bucket, key)]);
            }
        };

        let upload_id = UploadId::new(upload_id)?;
        let part_numbers = part_numbers
            .into_iter()
            .map(PartNumber::new)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(duplicate) = Validation::first_duplicate(part_numbers.iter().copied()) {
            return Err(DomainError::DuplicatePartNumber(duplicate.get()));
        }

        Ok(part_numbers
            .into_iter()
            .map(|part_number| {
                Self::part(
                    bucket.clone(),
                    key.clone(),
                    PartTarget {
                        upload_id: upload_id.clone(),
                        part_number,
                    },
                )
            })
            .collect())
    }

    pub fn method(&self) -> ClientMethod {
        self.method
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn key(&self) -> &ObjectKey {
        &self.key
    }

    pub fn part_target(&self) -> Option<&PartTarget> {
        self.part.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> BucketName {
        BucketName::new("b").unwrap()
    }

    fn key() -> ObjectKey {
        ObjectKey::new("k").unwrap()
    }

    #[test]
    fn test_plan_parts_in_request_order() {
        let targets = PresignTarget::plan(
            ClientMethod::UploadPart,
            bucket(),
            key(),
            Some("U1".to_string()),
            Some(vec![3, 1, 2]),
        )
        .unwrap();

        let numbers: Vec<u32> = targets
            .iter()
            .map(|t| t.part_target().unwrap().part_number.get())
            .collect();
        assert_eq!(numbers, vec![3, 1, 2]);
        assert!(targets
            .iter()
            .all(|t| t.part_target().unwrap().upload_id.as_str() == "U1"));
        assert!(targets.iter().all(|t| t.method() == ClientMethod::UploadPart));
    }

    #[test]
    fn test_plan_whole_object() {
        let targets =
            PresignTarget::plan(ClientMethod::PutObject, bucket(), key(), None, None).unwrap();
        assert_eq!(targets.len(), 1);
        assert!(targets[0].part_target().is_none());
        assert_eq!(targets[0].method(), ClientMethod::PutObject);
    }

    #[test]
    fn test_plan_put_object_with_only_upload_id_is_whole_object() {
        let targets = PresignTarget::plan(
            ClientMethod::PutObject,
            bucket(),
            key(),
            Some("U1".to_string()),
            Some(vec![]),
        )
        .unwrap();
        assert_eq!(targets.len(), 1);
        assert!(targets[0].part_target().is_none());
    }

    #[test]
    fn test_plan_upload_part_without_parts_is_rejected() {
        let result = PresignTarget::plan(
            ClientMethod::UploadPart,
            bucket(),
            key(),
            Some("U1".to_string()),
            None,
        );
        assert!(matches!(result, Err(DomainError::ValidationError { .. })));

        let result = PresignTarget::plan(
            ClientMethod::UploadPart,
            bucket(),
            key(),
            Some("  ".to_string()),
            Some(vec![1]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_put_object_with_parts_is_rejected() {
        let result = PresignTarget::plan(
            ClientMethod::PutObject,
            bucket(),
            key(),
            Some("U1".to_string()),
            Some(vec![1]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_rejects_out_of_range_and_duplicates() {
        let out_of_range = PresignTarget::plan(
            ClientMethod::UploadPart,
            bucket(),
            key(),
            Some("U1".to_string()),
            Some(vec![1, 0]),
        );
        assert!(matches!(
            out_of_range,
            Err(DomainError::InvalidPartNumber(_))
        ));

        let duplicate = PresignTarget::plan(
            ClientMethod::UploadPart,
            bucket(),
            key(),
            Some("U1".to_string()),
            Some(vec![1, 2, 1]),
        );
        assert_eq!(duplicate, Err(DomainError::DuplicatePartNumber(1)));
    }
}
