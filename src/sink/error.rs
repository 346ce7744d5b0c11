//! Sink construction errors.

use std::path::PathBuf;

/// Errors that can occur while constructing a sink.
///
/// Writing through an installed sink reports plain `std::io::Error`; only
/// construction has a failure mode worth naming.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to create sink file: {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
