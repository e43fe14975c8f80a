//! Time source for log headers

use chrono::{DateTime, Utc};

/// Supplies the instant stamped on each emitted line.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Useful for asserting exact headers.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use hrlog::{Clock, FixedClock};
///
/// let at = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap();
/// assert_eq!(FixedClock::new(at).now(), at);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
