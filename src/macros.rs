//! Logging macros for ergonomic log message formatting.
//!
//! The `*f!` macros wrap `format_args!`, so arguments are only formatted
//! when the level is enabled:
//!
//! ```
//! use hrlog::prelude::*;
//! use hrlog::{infof, warnf};
//!
//! let logger = Logger::new();
//! logger.set_output(std::io::sink());
//!
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! warnf!(logger, "Retry attempt {} of {}", 3, 5);
//! ```
//!
//! [`operands!`] builds the slice taken by the print and line styles:
//!
//! ```
//! use hrlog::prelude::*;
//! use hrlog::operands;
//!
//! let logger = Logger::new();
//! logger.set_output(std::io::sink());
//!
//! logger.infoln(operands!["user", 42, "logged in"]);
//! ```

/// Build a `&[&dyn Operand]` from a list of expressions.
#[macro_export]
macro_rules! operands {
    ($($operand:expr),* $(,)?) => {
        &[$(&$operand as &dyn $crate::Operand),*]
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use hrlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_output(std::io::sink());
/// use hrlog::debugf;
/// debugf!(logger, "Debug information");
/// debugf!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use hrlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_output(std::io::sink());
/// use hrlog::infof;
/// infof!(logger, "Application started");
/// infof!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use hrlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_output(std::io::sink());
/// use hrlog::errorf;
/// errorf!(logger, "Failed to connect to database");
/// errorf!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then run the logger's exit handler.
///
/// With the default handler the process exits with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log a panic-level message; evaluates to `Result<(), LoggedPanic>`.
///
/// # Examples
///
/// ```
/// # use hrlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_output(std::io::sink());
/// use hrlog::panicf;
///
/// fn check(logger: &Logger, shards: usize) -> std::result::Result<usize, LoggedPanic> {
///     if shards == 0 {
///         panicf!(logger, "no shards left")?;
///     }
///     Ok(shards)
/// }
///
/// assert_eq!(check(&logger, 0).unwrap_err().message(), "no shards left");
/// assert_eq!(check(&logger, 2).unwrap(), 2);
/// ```
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

/// Log operands at debug level in the ln style: space-separated, newline-terminated.
///
/// # Examples
///
/// ```
/// # use hrlog::prelude::*;
/// # let buffer = SharedBuffer::new();
/// # let logger = Logger::builder().flags(Flags::NONE).output(buffer.clone()).build();
/// use hrlog::debugln;
/// debugln!(logger, "cache", "hits", 42);
/// assert_eq!(buffer.contents_string(), "[DEBUG]: cache hits 42\n");
/// ```
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.debugln($crate::operands![$($operand),*])
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.infoln($crate::operands![$($operand),*])
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.warnln($crate::operands![$($operand),*])
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.errorln($crate::operands![$($operand),*])
    };
}

/// Fatal-level counterpart of [`debugln!`]; runs the exit handler after writing.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.fatalln($crate::operands![$($operand),*])
    };
}

/// Panic-level counterpart of [`debugln!`]; evaluates to `Result<(), LoggedPanic>`.
#[macro_export]
macro_rules! panicln {
    ($logger:expr $(, $operand:expr)* $(,)?) => {
        $logger.panicln($crate::operands![$($operand),*])
    };
}
