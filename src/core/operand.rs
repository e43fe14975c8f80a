//! Message composition for the operand-list call styles
//!
//! `debug`/`info`/… take a slice of [`Operand`]s and join them; `debugln`/
//! `infoln`/… do the same with different spacing. Text operands are glued
//! to their neighbours as-is, so `["id=", 7]` renders `id=7` while `[3, 4]`
//! renders `3 4`.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// A value that can appear in an operand list.
pub trait Operand: fmt::Display {
    /// Text operands never get a separating space from the print style.
    fn is_text(&self) -> bool {
        false
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

macro_rules! text_operand {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {
            fn is_text(&self) -> bool {
                true
            }
        })*
    };
}

macro_rules! plain_operand {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

text_operand!(str, String, Cow<'_, str>);
plain_operand!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Operand for fmt::Arguments<'_> {}

impl Operand for std::path::Display<'_> {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for dyn std::error::Error + '_ {}

impl Operand for dyn std::error::Error + Send + Sync + '_ {}

/// Written in place of output lost to a failing `Display` impl.
pub const FORMAT_ERROR_MARKER: &str = "%!(error)";

/// Append `value` to `out`, marking the spot if its `Display` impl fails.
pub(crate) fn write_display(out: &mut String, value: &dyn fmt::Display) {
    if write!(out, "{}", value).is_err() {
        out.push_str(FORMAT_ERROR_MARKER);
    }
}

/// Join operands, adding a space only between two non-text neighbours.
pub fn write_print(out: &mut String, operands: &[&dyn Operand]) {
    let mut prev_text = true;
    for (i, operand) in operands.iter().enumerate() {
        let text = operand.is_text();
        if i > 0 && !text && !prev_text {
            out.push(' ');
        }
        write_display(out, operand);
        prev_text = text;
    }
}

/// Join operands with a single space between every pair and end with `\n`.
pub fn write_println(out: &mut String, operands: &[&dyn Operand]) {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_display(out, operand);
    }
    out.push('\n');
}
