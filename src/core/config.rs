//! Declarative logger configuration
//!
//! ```
//! use hrlog::{Flags, LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(
//!     r#"{ "level": "warn", "flags": "date|time|shortfile", "prefix": "[api] " }"#,
//! ).unwrap();
//!
//! assert_eq!(config.level, LogLevel::Warn);
//! assert_eq!(config.flags, Flags::STANDARD | Flags::SHORT_FILE);
//! let logger = config.build().unwrap();
//! assert_eq!(logger.prefix(), "[api] ");
//! ```

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    log_level::LogLevel,
    logger::{Logger, LoggerBuilder},
};
use crate::sinks::{self, Sink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where lines go.
///
/// Serialized as `"stderr"`, `"stdout"` or `{ "file": "/path/to/app.log" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Open the destination.
    pub fn open(&self) -> Result<Sink> {
        match self {
            OutputTarget::Stderr => Ok(sinks::stderr()),
            OutputTarget::Stdout => Ok(sinks::stdout()),
            OutputTarget::File(path) if path.as_os_str().is_empty() => {
                Err(LoggerError::config("output", "file path is empty"))
            }
            OutputTarget::File(path) => sinks::file(path),
        }
    }
}

/// Every setting a [`Logger`] exposes, in serializable form.
///
/// Missing fields take the same defaults as [`Logger::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub flags: Flags,
    pub prefix: String,
    pub output: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            flags: Flags::STANDARD,
            prefix: String::new(),
            output: OutputTarget::Stderr,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A builder preloaded with this configuration.
    ///
    /// Fails if the output cannot be opened.
    pub fn builder(&self) -> Result<LoggerBuilder> {
        Ok(Logger::builder()
            .level(self.level)
            .flags(self.flags)
            .prefix(self.prefix.clone())
            .sink(self.output.open()?))
    }

    pub fn build(&self) -> Result<Logger> {
        Ok(self.builder()?.build())
    }

    /// Reconfigure an existing logger in place.
    ///
    /// The output is opened first; on failure the logger is left untouched.
    /// The replaced sink is dropped.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        let sink = self.output.open()?;
        logger.set_sink(sink);
        logger.set_level(self.level);
        logger.set_flags(self.flags);
        logger.set_prefix(self.prefix.clone());
        Ok(())
    }
}
