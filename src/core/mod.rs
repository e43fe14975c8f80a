//! Core logger types and traits

pub mod clock;
pub mod config;
pub mod error;
pub mod flags;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod operand;
pub mod panic;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use header::format_header;
pub use log_level::LogLevel;
pub use logger::{ExitHandler, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use operand::Operand;
pub use panic::{recover, LoggedPanic};
