use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::Config;

/// CORS restricted to the configured origins
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(86400)) // 24 hours
}

/// CORS configuration for development: any origin, method and header, with
/// credentials. Origins and headers are mirrored because a literal `*` cannot
/// be combined with credentials.
pub fn create_development_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Select the CORS layer the configuration asks for
pub fn create_cors_layer_for_config(config: &Config) -> CorsLayer {
    if config.cors_permissive {
        create_development_cors_layer()
    } else {
        create_cors_layer(&config.allowed_origins)
    }
}
