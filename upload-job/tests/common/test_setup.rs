use std::env;
use std::sync::Arc;

use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    types::{BucketLocationConstraint, CreateBucketConfiguration},
    Client as S3Client,
};
use upload_job::{
    config::{DATA_BUCKET_VAR, OUTPUT_KEY_VAR},
    REGION,
};

/// `LocalStack` edge endpoint
pub const LOCALSTACK_ENDPOINT_URL: &str = "http://localhost:4566";

/// Endpoint nothing listens on, used to provoke transport failures
pub const UNREACHABLE_ENDPOINT_URL: &str = "http://127.0.0.1:1";

/// Setup test environment variables and tracing
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Points the job's own configuration at the given destination
pub fn set_job_env(bucket: Option<&str>, key: Option<&str>) {
    match bucket {
        Some(bucket) => env::set_var(DATA_BUCKET_VAR, bucket),
        None => env::remove_var(DATA_BUCKET_VAR),
    }
    match key {
        Some(key) => env::set_var(OUTPUT_KEY_VAR, key),
        None => env::remove_var(OUTPUT_KEY_VAR),
    }
}

/// S3 client with static credentials and no retries against `endpoint_url`
pub fn s3_client_for(endpoint_url: &str) -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(REGION))
        .credentials_provider(Credentials::new("test", "test", None, None, "static"))
        .endpoint_url(endpoint_url)
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// `LocalStack` fixture with a freshly created bucket
pub struct LocalStackSetup {
    pub s3_client: Arc<S3Client>,
    pub bucket_name: String,
}

impl LocalStackSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let s3_client = s3_client_for(LOCALSTACK_ENDPOINT_URL);
        let bucket_name = format!("upload-job-test-{}", uuid::Uuid::new_v4());

        s3_client
            .create_bucket()
            .bucket(&bucket_name)
            .create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(REGION))
                    .build(),
            )
            .send()
            .await
            .expect("Failed to create test bucket");

        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Reads back the full content of `key`
    pub async fn read_object(&self, key: &str) -> Vec<u8> {
        let output = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await
            .expect("Failed to get object");

        output
            .body
            .collect()
            .await
            .expect("Failed to read object body")
            .into_bytes()
            .to_vec()
    }
}
