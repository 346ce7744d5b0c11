//! Single-stream buffer-swapping primitive.

use crate::stream::{ConsoleStream, Sink};

/// Swaps a stream's active buffer for a replacement sink, reversibly.
///
/// The redirector owns the replacement sink between cycles and the saved
/// original while redirected; exactly one of the two slots is occupied at
/// any time. Construction performs no swap. Enable and disable are
/// idempotent, and dropping a still-redirected instance restores the stream
/// first, so the stream never ends up referencing a sink the redirector
/// took down with it.
pub struct StreamRedirector<'s, C> {
    stream: &'s ConsoleStream<C>,
    replacement: Option<Box<dyn Sink<C>>>,
    saved: Option<Box<dyn Sink<C>>>,
}

impl<'s, C> StreamRedirector<'s, C> {
    /// Bind to `stream` with the sink to install on `enable()`.
    pub fn new(stream: &'s ConsoleStream<C>, replacement: Box<dyn Sink<C>>) -> Self {
        Self {
            stream,
            replacement: Some(replacement),
            saved: None,
        }
    }

    /// Install the replacement sink, saving the stream's current buffer.
    ///
    /// No-op while already redirected: the saved original must never be
    /// overwritten before it has been restored.
    pub fn enable(&mut self) {
        if self.saved.is_some() {
            return;
        }
        if let Some(replacement) = self.replacement.take() {
            self.saved = Some(self.stream.swap_buffer(replacement));
        }
    }

    /// Reinstall the saved original buffer, recovering the replacement for
    /// the next cycle. No-op while idle.
    pub fn disable(&mut self) {
        if let Some(original) = self.saved.take() {
            self.replacement = Some(self.stream.swap_buffer(original));
        }
    }

    pub fn is_redirected(&self) -> bool {
        self.saved.is_some()
    }
}

impl<C> Drop for StreamRedirector<'_, C> {
    fn drop(&mut self) {
        self.disable();
    }
}
