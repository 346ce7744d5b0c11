//! Sink that forwards console output into the tracing pipeline.

use std::io;

use crate::stream::Sink;

/// Forwards each complete output line as a `tracing` event.
///
/// Output accumulates until a newline, then one event is emitted per line
/// under the `console` target. `flush` emits any partial line; dropping the
/// sink does the same, so no output is lost when redirection ends.
#[derive(Debug, Default)]
pub struct TraceSink {
    pending: Vec<u8>,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit_complete_lines(&mut self) {
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            emit(&line[..line.len() - 1]);
        }
    }
}

fn emit(line: &[u8]) {
    tracing::info!(target: "console", "{}", String::from_utf8_lossy(line));
}

impl Sink<u8> for TraceSink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.pending.extend_from_slice(data);
        self.emit_complete_lines();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            emit(&self.pending);
            self.pending.clear();
        }
        Ok(())
    }
}

impl Sink<char> for TraceSink {
    fn write_all(&mut self, data: &[char]) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for &c in data {
            self.pending
                .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        self.emit_complete_lines();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Sink::<u8>::flush(self)
    }
}

impl Drop for TraceSink {
    fn drop(&mut self) {
        let _ = Sink::<u8>::flush(self);
    }
}
