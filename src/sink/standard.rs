//! Pass-through sinks over the real process streams.
//!
//! These are the default buffers of the console stream singletons: until a
//! redirector swaps something else in, console output lands where it always
//! did. The narrow implementations write bytes verbatim; the wide ones
//! encode Unicode scalars as UTF-8.

use std::io::{self, Write};

use crate::stream::Sink;

fn write_scalars(out: &mut impl Write, data: &[char]) -> io::Result<()> {
    let mut buf = [0u8; 4];
    for &c in data {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
    }
    Ok(())
}

/// Writes to the process's real standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink<u8> for StdoutSink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

impl Sink<char> for StdoutSink {
    fn write_all(&mut self, data: &[char]) -> io::Result<()> {
        write_scalars(&mut io::stdout().lock(), data)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Writes to the process's real standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink<u8> for StderrSink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

impl Sink<char> for StderrSink {
    fn write_all(&mut self, data: &[char]) -> io::Result<()> {
        write_scalars(&mut io::stderr().lock(), data)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}
