//! Resolves the destination and writes the payload to it

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use tracing::info;

use crate::config::{ConfigProvider, EnvConfigProvider, UploadConfig};
use crate::object_writer::{ObjectWriter, S3ObjectWriter};
use crate::types::{Environment, UploadResult};

/// Bytes written to the output object
pub const PAYLOAD: &[u8] = b"Here we have some data";

/// Region the S3 client is scoped to
pub const REGION: &str = "ap-southeast-1";

/// Writes [`PAYLOAD`] to the configured bucket and key
pub struct Uploader {
    writer: Arc<dyn ObjectWriter>,
}

impl Uploader {
    /// Creates a new uploader
    ///
    /// # Arguments
    ///
    /// * `writer` - Destination object store
    #[must_use]
    pub fn new(writer: Arc<dyn ObjectWriter>) -> Self {
        Self { writer }
    }

    /// Resolves the destination from `config_provider` and issues exactly one put
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Configuration` before any write if a variable is missing
    /// Returns `UploadError::Transport` if the write fails
    pub async fn run(&self, config_provider: &dyn ConfigProvider) -> UploadResult<()> {
        let config = UploadConfig::resolve(config_provider)?;
        self.upload(&config).await
    }

    /// Writes the payload to an already resolved destination
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Transport` if the write fails
    pub async fn upload(&self, config: &UploadConfig) -> UploadResult<()> {
        let receipt = self
            .writer
            .put_object(&config.bucket, &config.output_key, PAYLOAD)
            .await?;

        info!(
            bucket = %receipt.bucket,
            key = %receipt.key,
            size = receipt.size,
            e_tag = receipt.e_tag.as_deref().unwrap_or_default(),
            "Uploaded payload"
        );

        Ok(())
    }
}

/// Runs the job against the process environment and S3
///
/// Configuration is resolved before the S3 client is built, so a missing
/// variable never reaches the network.
///
/// # Errors
///
/// Returns `UploadError::Configuration` if `APP_ENV`, `DATA_BUCKET` or `OUTPUT_KEY` is invalid
/// Returns `UploadError::Transport` if the write fails
pub async fn run() -> UploadResult<()> {
    let environment = Environment::from_env()?;
    let config = UploadConfig::resolve(&EnvConfigProvider)?;

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let uploader = Uploader::new(Arc::new(S3ObjectWriter::new(s3_client)));

    uploader.upload(&config).await
}
