//! # Upload Gateway - presigned uploads for S3-compatible storage
//!
//! A small HTTP service that lets clients upload directly to an S3-compatible
//! object store. It never proxies file bytes: it signs time-limited PUT URLs
//! and coordinates the multipart upload lifecycle (initiate, complete, abort).
//!
//! ## Architecture Layers
//!
//! - **Domain**: Value objects and upload targets with their validation rules
//! - **Application**: Use cases, DTOs and the `ObjectStorage` port
//! - **Infrastructure**: The `rust-s3` adapter for the port
//! - **API**: axum handlers, middleware and the OpenAPI document
//!
//! ## Example Usage
//!
//! ```no_run
//! use upload_gateway::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let state = ApplicationBuilder::new(config).with_s3_storage()?.build()?;
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
