//! Line header rendering
//!
//! Headers are built byte by byte into the logger's reusable buffer. Numeric
//! fields go through [`itoa`] instead of `fmt` so the hot path stays free of
//! formatter machinery.

use super::flags::Flags;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Append `value` as decimal ASCII, zero-padded to `width` digits.
///
/// A width of 0 or 1 prints the number unpadded.
pub(crate) fn itoa(buf: &mut Vec<u8>, mut value: u32, mut width: usize) {
    // u32::MAX has 10 digits; widths used here never exceed 6.
    let mut digits = [0u8; 20];
    let mut pos = digits.len() - 1;
    while value >= 10 || width > 1 {
        width = width.saturating_sub(1);
        let q = value / 10;
        digits[pos] = b'0' + (value - q * 10) as u8;
        pos -= 1;
        value = q;
    }
    digits[pos] = b'0' + value as u8;
    buf.extend_from_slice(&digits[pos..]);
}

/// Final component of a `/`- or `\`-separated source path.
pub(crate) fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Render the header for one line into `buf`.
///
/// Field order is fixed: `YYYY/MM/DD `, `HH:MM:SS[.uuuuuu] `, `file:line: `,
/// then `prefix`. `at` must already be in the zone selected by
/// [`Flags::UTC`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hrlog::{format_header, Flags};
///
/// let at = NaiveDate::from_ymd_opt(5, 3, 7)
///     .unwrap()
///     .and_hms_opt(1, 2, 3)
///     .unwrap();
/// let mut buf = Vec::new();
/// format_header(&mut buf, Flags::STANDARD, &at, None, "app ");
/// assert_eq!(buf, b"0005/03/07 01:02:03 app ");
/// ```
pub fn format_header(
    buf: &mut Vec<u8>,
    flags: Flags,
    at: &NaiveDateTime,
    location: Option<(&str, u32)>,
    prefix: &str,
) {
    if flags.contains(Flags::DATE) {
        itoa(buf, at.year().max(0) as u32, 4);
        buf.push(b'/');
        itoa(buf, at.month(), 2);
        buf.push(b'/');
        itoa(buf, at.day(), 2);
        buf.push(b' ');
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        itoa(buf, at.hour(), 2);
        buf.push(b':');
        itoa(buf, at.minute(), 2);
        buf.push(b':');
        itoa(buf, at.second(), 2);
        if flags.contains(Flags::MICROSECONDS) {
            buf.push(b'.');
            itoa(buf, at.nanosecond() / 1_000, 6);
        }
        buf.push(b' ');
    }
    if flags.has_location() {
        if let Some((file, line)) = location {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(file)
            } else {
                file
            };
            buf.extend_from_slice(file.as_bytes());
            buf.push(b':');
            itoa(buf, line, 0);
            buf.extend_from_slice(b": ");
        }
    }
    buf.extend_from_slice(prefix.as_bytes());
}
