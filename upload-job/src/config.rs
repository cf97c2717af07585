//! Configuration sources for the upload job

use std::env::{self, VarError};

use crate::types::{UploadError, UploadResult};

/// Environment variable holding the destination bucket name
pub const DATA_BUCKET_VAR: &str = "DATA_BUCKET";

/// Environment variable holding the destination object key
pub const OUTPUT_KEY_VAR: &str = "OUTPUT_KEY";

/// Source of named configuration values
pub trait ConfigProvider: Send + Sync {
    /// Looks up a value by name, `Ok(None)` when it is not set
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Configuration` if the value is set but unreadable
    fn get(&self, name: &str) -> UploadResult<Option<String>>;
}

/// Reads configuration from the process environment at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigProvider;

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, name: &str) -> UploadResult<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(UploadError::Configuration(format!(
                "{name} environment variable is not valid unicode"
            ))),
        }
    }
}

/// Destination of the upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Destination bucket name
    pub bucket: String,
    /// Destination object key within the bucket
    pub output_key: String,
}

impl UploadConfig {
    /// Resolves `DATA_BUCKET` and `OUTPUT_KEY` from the given provider
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Configuration` naming the first variable that is
    /// unset, blank or not valid unicode
    pub fn resolve(provider: &dyn ConfigProvider) -> UploadResult<Self> {
        Ok(Self {
            bucket: required(provider, DATA_BUCKET_VAR)?,
            output_key: required(provider, OUTPUT_KEY_VAR)?,
        })
    }
}

fn required(provider: &dyn ConfigProvider, name: &str) -> UploadResult<String> {
    provider
        .get(name)?
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| UploadError::missing_var(name))
}

/// In-memory provider for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::HashMap;

    use super::ConfigProvider;
    use crate::types::UploadResult;

    /// Provider backed by a fixed map of values
    #[derive(Debug, Clone, Default)]
    pub struct StaticConfigProvider {
        values: HashMap<String, String>,
    }

    impl StaticConfigProvider {
        /// Creates a provider from `(name, value)` pairs
        #[must_use]
        pub fn new<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            Self {
                values: values
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl ConfigProvider for StaticConfigProvider {
        fn get(&self, name: &str) -> UploadResult<Option<String>> {
            Ok(self.values.get(name).cloned())
        }
    }
}
