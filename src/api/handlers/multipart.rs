use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_payload;
use crate::application::dto::{
    AbortMultipartUploadRequest, CompleteMultipartUploadRequest, CompleteMultipartUploadResponse,
    CreateMultipartUploadRequest,
};
use crate::application::use_cases::{
    AbortMultipartUploadUseCase, CompleteMultipartUploadUseCase, CreateMultipartUploadUseCase,
};

/// POST /create_multipart_upload
/// Start a multipart upload and return its upload id as a bare string
#[utoipa::path(
    post,
    path = "/create_multipart_upload",
    tag = "uploads",
    request_body = CreateMultipartUploadRequest,
    responses(
        (status = 200, description = "Upload id issued by the backend", body = String),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Storage backend error")
    )
)]
pub async fn create_multipart_upload_handler(
    State(use_case): State<Arc<CreateMultipartUploadUseCase>>,
    Json(request): Json<CreateMultipartUploadRequest>,
) -> Result<Json<String>, ApiError> {
    validate_payload(&request)?;

    let upload_id = use_case.execute(request).await?;

    Ok(Json(upload_id))
}

/// POST /complete_multipart_upload
/// Assemble the listed parts into the final object
#[utoipa::path(
    post,
    path = "/complete_multipart_upload",
    tag = "uploads",
    request_body = CompleteMultipartUploadRequest,
    responses(
        (status = 200, description = "Object assembled", body = CompleteMultipartUploadResponse),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Backend rejected the parts or the upload id")
    )
)]
pub async fn complete_multipart_upload_handler(
    State(use_case): State<Arc<CompleteMultipartUploadUseCase>>,
    Json(request): Json<CompleteMultipartUploadRequest>,
) -> Result<Json<CompleteMultipartUploadResponse>, ApiError> {
    validate_payload(&request)?;

    let response = use_case.execute(request).await?;

    Ok(Json(response))
}

/// POST /abort_multipart_upload
/// Abandon a multipart upload
#[utoipa::path(
    post,
    path = "/abort_multipart_upload",
    tag = "uploads",
    request_body = AbortMultipartUploadRequest,
    responses(
        (status = 204, description = "Upload aborted"),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Storage backend error")
    )
)]
pub async fn abort_multipart_upload_handler(
    State(use_case): State<Arc<AbortMultipartUploadUseCase>>,
    Json(request): Json<AbortMultipartUploadRequest>,
) -> Result<StatusCode, ApiError> {
    validate_payload(&request)?;

    use_case.execute(request).await?;

    Ok(StatusCode::NO_CONTENT)
}
