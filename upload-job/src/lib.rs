//! Batch job that writes a fixed payload to an S3 object

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Configuration sources and the resolved upload configuration
pub mod config;

/// Object storage write capability
pub mod object_writer;

/// Environment and error types
pub mod types;

/// The upload job itself
pub mod uploader;

pub use uploader::{run, Uploader, PAYLOAD, REGION};
