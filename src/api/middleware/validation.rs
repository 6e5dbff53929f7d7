use serde_json::json;
use validator::Validate;

use crate::api::errors::ApiError;

/// Field error details
#[derive(Debug, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validate a payload before it reaches a use case
pub fn validate_payload<T>(payload: &T) -> Result<(), ApiError>
where
    T: Validate,
{
    payload.validate().map_err(|validation_errors| {
        let mut field_errors: Vec<FieldError> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|cow| cow.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        // Nested list errors (e.g. parts[0].etag) are not part of field_errors()
        if field_errors.is_empty() {
            field_errors.push(FieldError {
                field: "body".to_string(),
                message: validation_errors.to_string(),
            });
        }
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::bad_request("Validation failed").with_details(json!(field_errors))
    })
}
