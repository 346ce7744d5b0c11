//! Ready-made sinks for console output.
//!
//! The default stream buffers ([`StdoutSink`], [`StderrSink`]) pass output
//! through to the real process streams. The rest are replacement sinks to
//! install while redirection is enabled: an in-memory capture buffer, a
//! forwarder into the `tracing` pipeline, a file-backed secondary channel,
//! and a discarding sink.

mod capture;
mod error;
mod file;
mod null;
mod standard;
mod trace;

pub use capture::{CaptureHandle, CaptureSink};
pub use error::SinkError;
pub use file::FileSink;
pub use null::NullSink;
pub use standard::{StderrSink, StdoutSink};
pub use trace::TraceSink;
