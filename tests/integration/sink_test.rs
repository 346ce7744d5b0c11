//! Tests for replacement sinks driven through a redirector.

use std::io;
use std::sync::{Arc, Mutex};

use console_redirect::sink::{CaptureSink, FileSink, NullSink};
use console_redirect::stream::{self, ConsoleStream};
use console_redirect::{StandardOutputRedirection, StreamRedirector};
use tracing_subscriber::fmt::MakeWriter;

use crate::common::global_streams;

#[test]
fn file_sink_receives_redirected_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("console.log");

    let original = CaptureSink::new();
    let original_handle = original.handle();
    let stream: ConsoleStream<u8> = ConsoleStream::new(Box::new(original));

    {
        let file_sink = FileSink::create(&path).unwrap();
        let mut redirector = StreamRedirector::new(&stream, Box::new(file_sink));

        redirector.enable();
        stream.write_str("to the file\n").unwrap();
        redirector.disable();

        stream.write_str("to the original\n").unwrap();
        // Dropping the redirector drops the file sink and flushes it.
    }

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "to the file\n");
    assert_eq!(original_handle.contents(), "to the original\n");
}

#[test]
fn null_sink_discards_the_window() {
    let original = CaptureSink::new();
    let handle = original.handle();
    let stream: ConsoleStream<u8> = ConsoleStream::new(Box::new(original));

    let mut redirector = StreamRedirector::new(&stream, Box::new(NullSink));
    redirector.enable();
    stream.write_str("swallowed").unwrap();
    redirector.disable();

    stream.write_str("kept").unwrap();
    assert_eq!(handle.contents(), "kept");
}

#[derive(Clone)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn to_trace_forwards_console_lines_as_events() {
    let _guard = global_streams();

    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .without_time()
        .with_ansi(false)
        .with_writer(SharedBuf(Arc::clone(&events)))
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut redirection = StandardOutputRedirection::to_trace();
        redirection.enable();
        stream::narrow_stdout().write_str("narrow line\n").unwrap();
        stream::wide_stdout().write_str("wide line\n").unwrap();
        redirection.disable();
    });

    let captured = events.lock().unwrap();
    let output = String::from_utf8_lossy(&captured);
    assert!(output.contains("narrow line"));
    assert!(output.contains("wide line"));
    assert!(output.contains("console"));
}
