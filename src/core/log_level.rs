//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, ordered from most severe to most verbose.
///
/// A call at level `X` is emitted when `X <= threshold`, so a threshold of
/// [`LogLevel::Warn`] lets Panic, Fatal, Error and Warn through and suppresses
/// Info and Debug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u32)]
pub enum LogLevel {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    #[default]
    Debug = 5,
}

const UNKNOWN_NAME: &str = "Unknown";

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Panic,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Message prefix embedded in every emitted line.
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Panic => "[PANIC]: ",
            LogLevel::Fatal => "[FATAL]: ",
            LogLevel::Error => "[ERROR]: ",
            LogLevel::Warn => "[WARN]: ",
            LogLevel::Info => "[INFO]: ",
            LogLevel::Debug => "[DEBUG]: ",
        }
    }

    /// Diagnostic name, e.g. `LevelWarn`.
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Panic => "LevelPanic",
            LogLevel::Fatal => "LevelFatal",
            LogLevel::Error => "LevelError",
            LogLevel::Warn => "LevelWarn",
            LogLevel::Info => "LevelInfo",
            LogLevel::Debug => "LevelDebug",
        }
    }

    /// Lowercase form used by configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Panic => "panic",
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub const fn from_u32(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Panic),
            1 => Some(LogLevel::Fatal),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Info),
            5 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Name of a raw level value; out-of-range values map to `"Unknown"`.
    pub const fn name_of(raw: u32) -> &'static str {
        match Self::from_u32(raw) {
            Some(level) => level.name(),
            None => UNKNOWN_NAME,
        }
    }

    /// Whether a call at this level passes a raw `threshold`.
    ///
    /// Thresholds are compared numerically, so values above
    /// [`LogLevel::Debug`] enable everything.
    #[inline]
    pub const fn is_enabled(self, threshold: u32) -> bool {
        self as u32 <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let bare = normalized.strip_prefix("level").unwrap_or(&normalized);
        match bare {
            "panic" => Ok(LogLevel::Panic),
            "fatal" => Ok(LogLevel::Fatal),
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<LogLevel> for &'static str {
    fn from(level: LogLevel) -> Self {
        level.as_str()
    }
}

impl From<LogLevel> for u32 {
    fn from(level: LogLevel) -> Self {
        level as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(LogLevel::Panic < LogLevel::Fatal);
        assert!(LogLevel::Fatal < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_is_enabled() {
        let threshold = LogLevel::Warn as u32;
        assert!(LogLevel::Panic.is_enabled(threshold));
        assert!(LogLevel::Error.is_enabled(threshold));
        assert!(LogLevel::Warn.is_enabled(threshold));
        assert!(!LogLevel::Info.is_enabled(threshold));
        assert!(!LogLevel::Debug.is_enabled(threshold));

        // Out-of-range thresholds compare numerically
        assert!(LogLevel::Debug.is_enabled(42));
    }

    #[test]
    fn test_tags_and_names() {
        assert_eq!(LogLevel::Warn.tag(), "[WARN]: ");
        assert_eq!(LogLevel::Panic.tag(), "[PANIC]: ");
        assert_eq!(LogLevel::Warn.name(), "LevelWarn");
        assert_eq!(LogLevel::Debug.to_string(), "LevelDebug");
    }

    #[test]
    fn test_name_of_out_of_range() {
        assert_eq!(LogLevel::name_of(3), "LevelWarn");
        assert_eq!(LogLevel::name_of(6), "Unknown");
        assert_eq!(LogLevel::name_of(u32::MAX), "Unknown");
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("LevelInfo".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&LogLevel::Error).unwrap();
        assert_eq!(json, "\"error\"");

        let level: LogLevel = serde_json::from_str("\"Fatal\"").unwrap();
        assert_eq!(level, LogLevel::Fatal);

        assert!(serde_json::from_str::<LogLevel>("\"loud\"").is_err());
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(LogLevel::try_from("error".to_string()).unwrap(), LogLevel::Error);
        assert!(matches!(
            LogLevel::try_from("loud".to_string()),
            Err(LoggerError::InvalidLevel(name)) if name == "loud"
        ));
    }
}
