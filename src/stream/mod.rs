//! Console stream handles and the sink abstraction.
//!
//! A [`ConsoleStream`] is the crate's rendition of a process standard stream:
//! a handle with one active buffer (a boxed [`Sink`]) that all writes go
//! through. The handle itself is a process-wide singleton; the buffer behind
//! it can be swapped, which is exactly what the redirection layer does.
//!
//! Two character encodings exist side by side: narrow streams carry bytes
//! (`Sink<u8>`), wide streams carry Unicode scalars (`Sink<char>`). The pair
//! mirrors the conventional split between byte-oriented and wide console
//! output APIs.

use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::sink::{StderrSink, StdoutSink};

/// A destination for console output of one character encoding.
///
/// This is the "buffer" installed on a [`ConsoleStream`]: the default sinks
/// pass output through to the real process streams, while replacement sinks
/// divert it elsewhere. Implementations decide what writing means; the stream
/// and redirection layers never interpret the data.
pub trait Sink<C>: Send {
    /// Write every element of `data` to the destination.
    fn write_all(&mut self, data: &[C]) -> io::Result<()>;

    /// Flush any internally buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// A console stream handle: one active sink, swappable.
///
/// The four process streams ([`narrow_stdout`], [`wide_stdout`],
/// [`narrow_stderr`], [`wide_stderr`]) are lazily-initialized singletons of
/// this type. Program code writes through the handle; it never observes which
/// sink is currently installed.
pub struct ConsoleStream<C> {
    buffer: Mutex<Box<dyn Sink<C>>>,
}

impl<C> ConsoleStream<C> {
    /// Create a stream with `buffer` as its initial active sink.
    pub fn new(buffer: Box<dyn Sink<C>>) -> Self {
        Self {
            buffer: Mutex::new(buffer),
        }
    }

    // A panicking sink must not wedge the stream for the rest of the
    // process, so poison is recovered rather than propagated.
    fn active(&self) -> MutexGuard<'_, Box<dyn Sink<C>>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write `data` through the active sink.
    pub fn write_all(&self, data: &[C]) -> io::Result<()> {
        self.active().write_all(data)
    }

    /// Flush the active sink.
    pub fn flush(&self) -> io::Result<()> {
        self.active().flush()
    }

    /// Install `replacement` as the active sink, returning the sink that was
    /// active until now. Only the redirection layer swaps buffers.
    pub(crate) fn swap_buffer(&self, replacement: Box<dyn Sink<C>>) -> Box<dyn Sink<C>> {
        std::mem::replace(&mut *self.active(), replacement)
    }
}

impl ConsoleStream<u8> {
    /// Write a string as UTF-8 bytes.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }

    /// Write formatted output; allows `write!(narrow_stdout(), ...)`.
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_str(&args.to_string())
    }
}

impl ConsoleStream<char> {
    /// Write a string as a sequence of Unicode scalars.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let chars: Vec<char> = text.chars().collect();
        self.write_all(&chars)
    }

    /// Write formatted output; allows `write!(wide_stdout(), ...)`.
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_str(&args.to_string())
    }
}

impl<C> fmt::Debug for ConsoleStream<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleStream").finish_non_exhaustive()
    }
}

/// The narrow (byte) standard output stream.
pub fn narrow_stdout() -> &'static ConsoleStream<u8> {
    static STREAM: OnceLock<ConsoleStream<u8>> = OnceLock::new();
    STREAM.get_or_init(|| ConsoleStream::new(Box::new(StdoutSink)))
}

/// The wide (Unicode scalar) standard output stream.
pub fn wide_stdout() -> &'static ConsoleStream<char> {
    static STREAM: OnceLock<ConsoleStream<char>> = OnceLock::new();
    STREAM.get_or_init(|| ConsoleStream::new(Box::new(StdoutSink)))
}

/// The narrow (byte) standard error stream.
pub fn narrow_stderr() -> &'static ConsoleStream<u8> {
    static STREAM: OnceLock<ConsoleStream<u8>> = OnceLock::new();
    STREAM.get_or_init(|| ConsoleStream::new(Box::new(StderrSink)))
}

/// The wide (Unicode scalar) standard error stream.
pub fn wide_stderr() -> &'static ConsoleStream<char> {
    static STREAM: OnceLock<ConsoleStream<char>> = OnceLock::new();
    STREAM.get_or_init(|| ConsoleStream::new(Box::new(StderrSink)))
}
