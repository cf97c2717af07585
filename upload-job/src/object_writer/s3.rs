//! S3-backed object writer

use std::sync::Arc;

use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream, Client as S3Client};
use tracing::{debug, error};

use super::{ObjectWriter, PutReceipt};
use crate::types::{UploadError, UploadResult};

/// Writes objects with a single S3 `PutObject` call
pub struct S3ObjectWriter {
    s3_client: Arc<S3Client>,
}

impl S3ObjectWriter {
    /// Creates a new writer
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait::async_trait]
impl ObjectWriter for S3ObjectWriter {
    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> UploadResult<PutReceipt> {
        debug!("Putting {} bytes to s3://{}/{}", body.len(), bucket, key);

        let output = self
            .s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .send()
            .await
            .map_err(|e| {
                let status = e.raw_response().map(|raw| raw.status().as_u16());
                error!(
                    status,
                    "Failed to put s3://{}/{}: {}",
                    bucket,
                    key,
                    DisplayErrorContext(&e)
                );
                UploadError::from(e)
            })?;

        Ok(PutReceipt {
            bucket: bucket.to_string(),
            key: key.to_string(),
            size: body.len(),
            e_tag: output.e_tag().map(str::to_string),
        })
    }
}
