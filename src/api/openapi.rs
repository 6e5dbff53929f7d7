use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    AbortMultipartUploadRequest, CompleteMultipartUploadRequest, CompleteMultipartUploadResponse,
    CreateMultipartUploadRequest, PartDto, PresignedUrlRequest,
};
use crate::domain::value_objects::ClientMethod;

/// OpenAPI specification for the upload gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload Gateway API",
        version = "0.1.0",
        description = "Presigned URL issuance and multipart upload coordination for S3-compatible storage"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::ping_handler,
        crate::api::handlers::presigned_urls::generate_presigned_urls_handler,
        crate::api::handlers::multipart::create_multipart_upload_handler,
        crate::api::handlers::multipart::complete_multipart_upload_handler,
        crate::api::handlers::multipart::abort_multipart_upload_handler,
    ),
    components(
        schemas(
            ClientMethod,
            PresignedUrlRequest,
            CreateMultipartUploadRequest,
            PartDto,
            CompleteMultipartUploadRequest,
            CompleteMultipartUploadResponse,
            AbortMultipartUploadRequest,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "uploads", description = "Presigned URLs and multipart upload lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
