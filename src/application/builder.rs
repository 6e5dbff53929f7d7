use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::ObjectStorage,
    use_cases::{
        AbortMultipartUploadUseCase, CompleteMultipartUploadUseCase,
        CreateMultipartUploadUseCase, GeneratePresignedUrlsUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::storage::S3ObjectStorage;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    storage: Option<Arc<dyn ObjectStorage>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: None,
        }
    }

    /// Connect the S3-compatible storage client from configuration
    pub fn with_s3_storage(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = S3ObjectStorage::from_config(&self.config)?;
        info!(
            endpoint = %self.config.s3_endpoint,
            region = %self.config.s3_region,
            path_style = self.config.s3_path_style,
            "Storage client initialized"
        );
        self.storage = Some(Arc::new(storage));
        Ok(self)
    }

    /// Use an already constructed storage adapter
    pub fn with_storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let storage = self.storage.ok_or("Storage client not initialized")?;

        let presign_use_case = Arc::new(GeneratePresignedUrlsUseCase::new(
            Arc::clone(&storage),
            self.config.presign_expiry(),
        ));
        let create_use_case = Arc::new(CreateMultipartUploadUseCase::new(Arc::clone(&storage)));
        let complete_use_case =
            Arc::new(CompleteMultipartUploadUseCase::new(Arc::clone(&storage)));
        let abort_use_case = Arc::new(AbortMultipartUploadUseCase::new(storage));

        info!("Application layer initialized");

        Ok(AppState {
            presign_use_case,
            create_use_case,
            complete_use_case,
            abort_use_case,
            config: self.config,
        })
    }
}
