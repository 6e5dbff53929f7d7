use axum::response::Json;

/// GET /
/// Liveness check; never touches the storage backend
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn ping_handler() -> Json<&'static str> {
    Json("pong")
}
