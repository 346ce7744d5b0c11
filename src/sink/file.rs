//! File-backed sink for a secondary console channel.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::error::SinkError;
use crate::stream::Sink;

/// Writes console output to a file.
///
/// Construction is the only fallible step; once created, writes report plain
/// I/O errors like any other sink. Buffered output is flushed when the sink
/// is dropped.
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (truncating) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SinkError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Sink<u8> for FileSink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Sink<char> for FileSink {
    fn write_all(&mut self, data: &[char]) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for &c in data {
            self.writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
