//! Environment configuration for different deployment stages

use std::env;

use aws_config::{retry::RetryConfig, BehaviorVersion, Region};

use super::{UploadError, UploadResult};
use crate::uploader::REGION;

/// `LocalStack` endpoint used when running in development
const LOCALSTACK_ENDPOINT_URL: &str = "http://localhost:4566";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Batch containers are launched without `APP_ENV`, so an unset value
    /// means production.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Configuration` if `APP_ENV` contains an invalid value
    pub fn from_env() -> UploadResult<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "production".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(UploadError::Configuration(format!(
                "Invalid environment: {env}"
            ))),
        }
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub fn override_aws_endpoint_url(&self) -> Option<String> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development => Some(
                env::var("AWS_ENDPOINT_URL")
                    .unwrap_or_else(|_| LOCALSTACK_ENDPOINT_URL.to_string()),
            ),
        }
    }

    /// AWS configuration pinned to the job region, with SDK retries disabled
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::from_static(REGION))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // Override "force path style" to true for compatibility with LocalStack
        // https://github.com/awslabs/aws-sdk-rust/discussions/874
        if matches!(self, Self::Development) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }
}
