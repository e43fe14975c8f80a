//! In-memory sink shared between the logger and an observer

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A growable byte buffer that can be handed to a logger and read back.
///
/// Clones share the same storage.
///
/// # Example
///
/// ```
/// use hrlog::{Flags, Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new();
/// logger.set_output(buffer.clone());
/// logger.set_flags(Flags::NONE);
///
/// logger.infof(format_args!("ready"));
/// assert_eq!(buffer.contents_string(), "[INFO]: ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Contents decoded as UTF-8, replacing invalid sequences.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Contents split into lines, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
