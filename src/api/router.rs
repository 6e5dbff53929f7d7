use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    abort_multipart_upload_handler, complete_multipart_upload_handler,
    create_multipart_upload_handler, generate_presigned_urls_handler, ping_handler,
};
use crate::api::middleware::{cors, metrics};
use crate::api::openapi;
use crate::application::use_cases::{
    AbortMultipartUploadUseCase, CompleteMultipartUploadUseCase, CreateMultipartUploadUseCase,
    GeneratePresignedUrlsUseCase,
};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub presign_use_case: Arc<GeneratePresignedUrlsUseCase>,
    pub create_use_case: Arc<CreateMultipartUploadUseCase>,
    pub complete_use_case: Arc<CompleteMultipartUploadUseCase>,
    pub abort_use_case: Arc<AbortMultipartUploadUseCase>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let presign_state = Arc::clone(&state.presign_use_case);
    let create_state = Arc::clone(&state.create_use_case);
    let complete_state = Arc::clone(&state.complete_use_case);
    let abort_state = Arc::clone(&state.abort_use_case);

    Router::new()
        .route("/", get(ping_handler))
        .route(
            "/generate_presigned_urls",
            post(generate_presigned_urls_handler).with_state(presign_state),
        )
        .route(
            "/create_multipart_upload",
            post(create_multipart_upload_handler).with_state(create_state),
        )
        .route(
            "/complete_multipart_upload",
            post(complete_multipart_upload_handler).with_state(complete_state),
        )
        .route(
            "/abort_multipart_upload",
            post(abort_multipart_upload_handler).with_state(abort_state),
        )
        .merge(openapi::swagger_ui())
        .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
        .layer(cors::create_cors_layer_for_config(&state.config))
}
