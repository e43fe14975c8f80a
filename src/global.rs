//! Process-wide default logger
//!
//! The default instance is built on first use, exactly once even when
//! several threads race to log first. [`set_default`] swaps in another
//! logger, which is how tests capture what the free functions write.
//!
//! ```
//! use hrlog::{Flags, Logger, SharedBuffer};
//! use std::sync::Arc;
//!
//! let buffer = SharedBuffer::new();
//! let previous = hrlog::set_default(Arc::new(
//!     Logger::builder().flags(Flags::NONE).output(buffer.clone()).build(),
//! ));
//!
//! hrlog::infof(format_args!("{} workers up", 4));
//! assert_eq!(buffer.contents_string(), "[INFO]: 4 workers up\n");
//!
//! hrlog::set_default(previous);
//! ```

use crate::core::{Flags, LogLevel, LoggedPanic, Logger, Operand};
use crate::sinks::Sink;
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};

static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::new())))
}

/// The logger behind the free functions.
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&*slot().read())
}

/// Install `logger` as the default, returning the one it replaces.
pub fn set_default(logger: Arc<Logger>) -> Arc<Logger> {
    std::mem::replace(&mut *slot().write(), logger)
}

pub fn set_output<W: Write + Send + 'static>(out: W) -> Sink {
    default_logger().set_output(out)
}

pub fn set_level(level: LogLevel) {
    default_logger().set_level(level);
}

pub fn set_raw_level(raw: u32) {
    default_logger().set_raw_level(raw);
}

pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

#[track_caller]
pub fn debug(operands: &[&dyn Operand]) {
    default_logger().debug(operands);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

#[track_caller]
pub fn debugln(operands: &[&dyn Operand]) {
    default_logger().debugln(operands);
}

#[track_caller]
pub fn info(operands: &[&dyn Operand]) {
    default_logger().info(operands);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn infoln(operands: &[&dyn Operand]) {
    default_logger().infoln(operands);
}

#[track_caller]
pub fn warn(operands: &[&dyn Operand]) {
    default_logger().warn(operands);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

#[track_caller]
pub fn warnln(operands: &[&dyn Operand]) {
    default_logger().warnln(operands);
}

#[track_caller]
pub fn error(operands: &[&dyn Operand]) {
    default_logger().error(operands);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn errorln(operands: &[&dyn Operand]) {
    default_logger().errorln(operands);
}

#[track_caller]
pub fn fatal(operands: &[&dyn Operand]) {
    default_logger().fatal(operands);
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}

#[track_caller]
pub fn fatalln(operands: &[&dyn Operand]) {
    default_logger().fatalln(operands);
}

#[track_caller]
pub fn panic(operands: &[&dyn Operand]) -> Result<(), LoggedPanic> {
    default_logger().panic(operands)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> Result<(), LoggedPanic> {
    default_logger().panicf(args)
}

#[track_caller]
pub fn panicln(operands: &[&dyn Operand]) -> Result<(), LoggedPanic> {
    default_logger().panicln(operands)
}
