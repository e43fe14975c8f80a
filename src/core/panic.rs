//! Panic-level logging outcome
//!
//! `panic`, `panicf` and `panicln` write their line and then return
//! `Err(LoggedPanic)`. The error travels up with `?` like any other failure
//! until something handles it; [`recover`] is the explicit boundary that
//! turns it back into a value, and also catches a `LoggedPanic` raised by
//! [`LoggedPanic::resume`] for callers that want real unwinding.

use std::panic::{self, AssertUnwindSafe};

/// The message of a panic-level log call, without its `[PANIC]: ` tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoggedPanic {
    message: String,
}

impl LoggedPanic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// Start unwinding with `self` as the panic payload.
    pub fn resume(self) -> ! {
        panic::panic_any(self)
    }
}

/// Run `f`, converting an unwinding [`LoggedPanic`] into `Err`.
///
/// Errors returned by `f` pass through untouched. Panics with any other
/// payload keep unwinding.
///
/// # Example
///
/// ```
/// use hrlog::{recover, Logger};
///
/// let logger = Logger::new();
/// logger.set_output(std::io::sink());
///
/// let outcome = recover(|| {
///     logger.panicf(format_args!("lost {} shards", 3))?;
///     Ok("unreachable")
/// });
/// assert_eq!(outcome.unwrap_err().message(), "lost 3 shards");
/// ```
pub fn recover<T, F>(f: F) -> Result<T, LoggedPanic>
where
    F: FnOnce() -> Result<T, LoggedPanic>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => match payload.downcast::<LoggedPanic>() {
            Ok(logged) => Err(*logged),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
