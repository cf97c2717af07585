//! Object storage write capability
mod s3;

pub use s3::S3ObjectWriter;

use crate::types::UploadResult;

/// Outcome of a successful put
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    /// Bucket the object was written to
    pub bucket: String,
    /// Key the object was written to
    pub key: String,
    /// Number of body bytes sent
    pub size: usize,
    /// `ETag` reported by the storage service, if any
    pub e_tag: Option<String>,
}

/// Writes whole objects to a bucket
#[async_trait::async_trait]
pub trait ObjectWriter: Send + Sync {
    /// Writes `body` to `bucket`/`key`, replacing any existing object
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Transport` if the write does not complete
    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> UploadResult<PutReceipt>;
}

/// In-memory writers for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::{ObjectWriter, PutReceipt};
    use crate::types::{UploadError, UploadResult};

    /// Object store keeping every put in memory
    #[derive(Debug, Default)]
    pub struct InMemoryObjectStore {
        objects: Mutex<HashMap<(String, String), Vec<u8>>>,
        puts: AtomicUsize,
    }

    impl InMemoryObjectStore {
        /// Creates an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the current content of `bucket`/`key`
        ///
        /// # Panics
        ///
        /// Panics if the store lock is poisoned
        #[must_use]
        pub fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
            self.objects
                .lock()
                .expect("object store lock poisoned")
                .get(&(bucket.to_string(), key.to_string()))
                .cloned()
        }

        /// Number of objects currently stored
        ///
        /// # Panics
        ///
        /// Panics if the store lock is poisoned
        #[must_use]
        pub fn len(&self) -> usize {
            self.objects.lock().expect("object store lock poisoned").len()
        }

        /// Whether the store holds no objects
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Number of put calls received
        #[must_use]
        pub fn put_count(&self) -> usize {
            self.puts.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ObjectWriter for InMemoryObjectStore {
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            body: &[u8],
        ) -> UploadResult<PutReceipt> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.objects
                .lock()
                .expect("object store lock poisoned")
                .insert((bucket.to_string(), key.to_string()), body.to_vec());

            Ok(PutReceipt {
                bucket: bucket.to_string(),
                key: key.to_string(),
                size: body.len(),
                e_tag: None,
            })
        }
    }

    /// Writer whose every put fails with a transport error
    #[derive(Debug)]
    pub struct FailingObjectWriter {
        message: String,
        puts: AtomicUsize,
    }

    impl FailingObjectWriter {
        /// Creates a writer failing with `message`
        #[must_use]
        pub fn new(message: impl Into<String>) -> Self {
            Self {
                message: message.into(),
                puts: AtomicUsize::new(0),
            }
        }

        /// Number of put calls received
        #[must_use]
        pub fn put_count(&self) -> usize {
            self.puts.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ObjectWriter for FailingObjectWriter {
        async fn put_object(
            &self,
            _bucket: &str,
            _key: &str,
            _body: &[u8],
        ) -> UploadResult<PutReceipt> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Err(UploadError::Transport(self.message.clone().into()))
        }
    }
}
