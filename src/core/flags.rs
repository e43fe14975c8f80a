//! Header formatting options
//!
//! [`Flags`] is a small set of options selecting which fields precede each
//! message. Options combine with `|`:
//!
//! ```
//! use hrlog::Flags;
//!
//! let flags = Flags::DATE | Flags::MICROSECONDS | Flags::SHORT_FILE;
//! assert!(flags.contains(Flags::DATE));
//! assert!(!flags.contains(Flags::UTC));
//! ```

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flags(u32);

impl Flags {
    /// No header at all: lines are `prefix + tag + message`.
    pub const NONE: Flags = Flags(0);
    /// `YYYY/MM/DD`
    pub const DATE: Flags = Flags(1 << 0);
    /// `HH:MM:SS`
    pub const TIME: Flags = Flags(1 << 1);
    /// `HH:MM:SS.uuuuuu`, implies [`Flags::TIME`]
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line of the call site
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path component and line; wins over [`Flags::LONG_FILE`]
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render the timestamp in UTC instead of local time
    pub const UTC: Flags = Flags(1 << 5);
    /// Date and time, used by [`Logger::new`](crate::Logger::new)
    pub const STANDARD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = 0b11_1111;

    const NAMED: [(&'static str, Flags); 6] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// All options in `other` are set.
    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one option in `other` is set.
    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn union(self, other: Flags) -> Self {
        Flags(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    /// Whether any date or time field is rendered.
    #[inline]
    pub const fn has_timestamp(self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Whether the call site must be resolved.
    #[inline]
    pub const fn has_location(self) -> bool {
        self.intersects(Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STANDARD
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.insert(rhs);
    }
}

impl Sub for Flags {
    type Output = Flags;

    fn sub(self, rhs: Flags) -> Flags {
        Flags(self.0 & !rhs.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses `|`- or `,`-separated option names, e.g. `"date|time|utc"`.
///
/// Names are case-insensitive and ignore `-`/`_`, so `short_file` and
/// `Short-File` both mean [`Flags::SHORT_FILE`]. `standard` and `none` are
/// accepted as presets.
impl FromStr for Flags {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for part in s.split(['|', ',']) {
            let name: String = part
                .trim()
                .chars()
                .filter(|c| *c != '-' && *c != '_')
                .collect::<String>()
                .to_lowercase();
            match name.as_str() {
                "" | "none" => {}
                "standard" | "std" => flags |= Flags::STANDARD,
                "micros" => flags |= Flags::MICROSECONDS,
                other => {
                    let flag = Self::NAMED
                        .iter()
                        .find(|(known, _)| *known == other)
                        .map(|(_, flag)| *flag)
                        .ok_or_else(|| LoggerError::InvalidFlag(part.trim().to_string()))?;
                    flags |= flag;
                }
            }
        }
        Ok(flags)
    }
}

impl TryFrom<String> for Flags {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flags> for String {
    fn from(flags: Flags) -> Self {
        flags.to_string()
    }
}
