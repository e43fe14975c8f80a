//! # hrlog
//!
//! A small leveled text logger.
//!
//! ## Features
//!
//! - **Six levels**: Panic, Fatal, Error, Warn, Info, Debug, filtered against
//!   a threshold that can change at any time
//! - **Configurable header**: date, time, microseconds, UTC, source location
//!   and a free-form prefix
//! - **Thread Safe**: one lock per logger, lines never interleave
//! - **Zero setup**: free functions log through a process-wide default logger
//!
//! ```
//! use hrlog::prelude::*;
//!
//! let logger = Logger::new();
//! logger.set_output(std::io::sink());
//! logger.set_prefix("[app] ");
//! logger.set_level(LogLevel::Info);
//!
//! logger.infof(format_args!("listening on {}", 8080));
//! logger.debugf(format_args!("not written"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        recover, Clock, ExitHandler, FixedClock, Flags, LogLevel, LoggedPanic, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Operand, OutputTarget, Result,
        SystemClock,
    };
    pub use crate::sinks::{SharedBuffer, Sink};
}

pub use crate::core::{
    format_header, recover, Clock, ExitHandler, FixedClock, Flags, LogLevel, LoggedPanic, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Operand, OutputTarget, Result,
    SystemClock, FATAL_EXIT_CODE,
};
pub use global::{
    debug, debugf, debugln, default_logger, error, errorf, errorln, fatal, fatalf, fatalln, info,
    infof, infoln, panic, panicf, panicln, set_default, set_flags, set_level, set_output,
    set_prefix, set_raw_level, warn, warnf, warnln,
};
pub use sinks::{SharedBuffer, Sink};
