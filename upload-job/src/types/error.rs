//! Error types for the upload job

use aws_sdk_s3::{error::SdkError, operation::put_object::PutObjectError};
use thiserror::Error;

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while running the upload job
#[derive(Error, Debug)]
pub enum UploadError {
    /// A required configuration value is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote write could not be completed
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl UploadError {
    /// Builds a configuration error for a missing environment variable
    #[must_use]
    pub fn missing_var(name: &str) -> Self {
        Self::Configuration(format!("{name} environment variable not set"))
    }

    /// Whether this is a configuration error
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether this is a transport error
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<SdkError<PutObjectError>> for UploadError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        Self::Transport(Box::new(error))
    }
}
