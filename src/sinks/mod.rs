//! Sink implementations
//!
//! A sink is any `Write + Send` destination. The logger writes each finished
//! line with a single `write_all` while holding its lock, so lines from
//! different threads never interleave.

pub mod shared_buffer;

pub use shared_buffer::SharedBuffer;

use crate::core::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Owned destination for formatted lines.
pub type Sink = Box<dyn Write + Send>;

/// The process's standard error stream (the default sink).
pub fn stderr() -> Sink {
    Box::new(io::stderr())
}

pub fn stdout() -> Sink {
    Box::new(io::stdout())
}

/// Open `path` for appending, creating it if needed.
///
/// The file is not buffered: every line reaches the OS in one write, so
/// nothing is lost when the logger is dropped without a flush.
pub fn file(path: impl AsRef<Path>) -> Result<Sink> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::file_sink(path.display().to_string(), e))?;
    Ok(Box::new(file))
}
