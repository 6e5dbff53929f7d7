use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_payload;
use crate::application::dto::PresignedUrlRequest;
use crate::application::use_cases::GeneratePresignedUrlsUseCase;

/// POST /generate_presigned_urls
/// Issue one URL per requested part, or a single whole-object URL
#[utoipa::path(
    post,
    path = "/generate_presigned_urls",
    tag = "uploads",
    request_body = PresignedUrlRequest,
    responses(
        (status = 200, description = "URLs in request order", body = Vec<String>),
        (status = 400, description = "Invalid request"),
        (status = 422, description = "Malformed JSON body"),
        (status = 502, description = "Storage backend failed to sign")
    )
)]
pub async fn generate_presigned_urls_handler(
    State(use_case): State<Arc<GeneratePresignedUrlsUseCase>>,
    Json(request): Json<PresignedUrlRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
    validate_payload(&request)?;

    let urls = use_case.execute(request).await?;

    Ok(Json(urls))
}
