//! Discarding sink.

use crate::stream::Sink;

/// Accepts and discards all output, any encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<C> Sink<C> for NullSink {
    fn write_all(&mut self, _data: &[C]) -> std::io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
