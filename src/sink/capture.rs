//! In-memory capture sink with a shared read handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::stream::Sink;

fn lock<T>(buffer: &Mutex<T>) -> MutexGuard<'_, T> {
    buffer.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Collects everything written to it into a shared buffer.
///
/// The sink is installed on a stream while redirection is enabled; a
/// [`CaptureHandle`] created beforehand reads the collected output at any
/// point, including after the sink (and the redirection object owning it)
/// has been dropped.
#[derive(Debug)]
pub struct CaptureSink<C> {
    buffer: Arc<Mutex<Vec<C>>>,
}

impl<C> CaptureSink<C> {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handle onto the shared buffer for reading captured output.
    pub fn handle(&self) -> CaptureHandle<C> {
        CaptureHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<C> Default for CaptureSink<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone + Send> Sink<C> for CaptureSink<C> {
    fn write_all(&mut self, data: &[C]) -> std::io::Result<()> {
        lock(&self.buffer).extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Read access to a [`CaptureSink`]'s buffer.
#[derive(Debug, Clone)]
pub struct CaptureHandle<C> {
    buffer: Arc<Mutex<Vec<C>>>,
}

impl<C> CaptureHandle<C> {
    /// Number of captured elements (bytes or scalars).
    pub fn len(&self) -> usize {
        lock(&self.buffer).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.buffer).is_empty()
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }
}

impl CaptureHandle<u8> {
    /// Captured output as text (lossy UTF-8).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }

    /// Captured output as raw bytes.
    pub fn bytes(&self) -> Vec<u8> {
        lock(&self.buffer).clone()
    }
}

impl CaptureHandle<char> {
    /// Captured output as text.
    pub fn contents(&self) -> String {
        lock(&self.buffer).iter().collect()
    }
}
