//! Dual-stream standard output redirection.

use tracing::debug;

use super::redirector::StreamRedirector;
use crate::sink::{CaptureHandle, CaptureSink, TraceSink};
use crate::stream::{self, Sink};

/// Redirects the narrow and wide standard output streams as one unit.
///
/// Construction binds two [`StreamRedirector`]s to the process's standard
/// output singletons with the given replacement sinks; nothing is redirected
/// until `enable()`. The pair may go through any number of enable/disable
/// cycles, and dropping the object restores both streams before the
/// replacement sinks are torn down.
pub struct StandardOutputRedirection {
    narrow: StreamRedirector<'static, u8>,
    wide: StreamRedirector<'static, char>,
}

impl StandardOutputRedirection {
    /// Bind to the standard output streams with the given replacement sinks.
    pub fn new(narrow_sink: Box<dyn Sink<u8>>, wide_sink: Box<dyn Sink<char>>) -> Self {
        Self {
            narrow: StreamRedirector::new(stream::narrow_stdout(), narrow_sink),
            wide: StreamRedirector::new(stream::wide_stdout(), wide_sink),
        }
    }

    /// Redirect into in-memory capture buffers, returning their read handles.
    pub fn capturing() -> (Self, CaptureHandle<u8>, CaptureHandle<char>) {
        let narrow = CaptureSink::new();
        let wide = CaptureSink::new();
        let narrow_handle = narrow.handle();
        let wide_handle = wide.handle();
        (
            Self::new(Box::new(narrow), Box::new(wide)),
            narrow_handle,
            wide_handle,
        )
    }

    /// Redirect into the `tracing` pipeline, one event per output line.
    pub fn to_trace() -> Self {
        Self::new(Box::new(TraceSink::new()), Box::new(TraceSink::new()))
    }

    /// Redirect both streams. Idempotent.
    pub fn enable(&mut self) {
        if !self.is_enabled() {
            debug!("redirecting standard output streams");
        }
        self.narrow.enable();
        self.wide.enable();
    }

    /// Restore both streams to their original buffers. Idempotent.
    pub fn disable(&mut self) {
        if self.is_enabled() {
            debug!("restoring standard output streams");
        }
        self.narrow.disable();
        self.wide.disable();
    }

    pub fn is_enabled(&self) -> bool {
        // Both encodings always toggle together.
        self.narrow.is_redirected()
    }
}

impl Drop for StandardOutputRedirection {
    fn drop(&mut self) {
        // Restore before the redirectors (and the replacement sinks they
        // own) are dropped.
        self.disable();
    }
}
