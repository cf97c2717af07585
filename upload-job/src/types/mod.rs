mod environment;
mod error;

pub use environment::Environment;
pub use error::{UploadError, UploadResult};
