//! Main logger implementation

use super::{
    clock::{Clock, SystemClock},
    error::LoggerError,
    flags::Flags,
    header,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    operand::{self, Operand},
    panic::LoggedPanic,
};
use crate::sinks::{self, Sink};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Called with the exit status after a fatal-level line has been written.
///
/// The default handler terminates the process. Tests can install one that
/// records the code and returns, in which case the fatal call returns too.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit status passed to the [`ExitHandler`] by fatal-level calls.
pub const FATAL_EXIT_CODE: i32 = 1;

fn process_exit() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

/// The three call styles, rendered only once a call is known to be enabled.
enum Message<'a> {
    Print(&'a [&'a dyn Operand]),
    Format(fmt::Arguments<'a>),
    Line(&'a [&'a dyn Operand]),
}

impl Message<'_> {
    fn render(&self, out: &mut String) {
        match self {
            Message::Print(operands) => operand::write_print(out, operands),
            Message::Format(args) => {
                if out.write_fmt(*args).is_err() {
                    out.push_str(operand::FORMAT_ERROR_MARKER);
                }
            }
            Message::Line(operands) => operand::write_println(out, operands),
        }
    }
}

/// Everything guarded by the logger's lock.
struct State {
    out: Sink,
    prefix: String,
    /// Reused for every line to avoid reallocating.
    buf: Vec<u8>,
}

/// A leveled text logger.
///
/// All methods take `&self`: threshold and flags are atomics, while the sink,
/// prefix and line buffer sit behind one mutex so concurrent lines never
/// interleave. Share a logger across threads with `Arc<Logger>`.
pub struct Logger {
    level: AtomicU32,
    flags: AtomicU32,
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
    on_exit: ExitHandler,
    metrics: LoggerMetrics,
}

impl Logger {
    /// A logger writing to stderr at [`LogLevel::Debug`] with
    /// [`Flags::STANDARD`] headers.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use hrlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Warn)
    ///     .flags(Flags::STANDARD | Flags::SHORT_FILE)
    ///     .prefix("[api] ")
    ///     .build();
    /// assert_eq!(logger.level(), Some(LogLevel::Warn));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the sink, returning the previous one unflushed.
    pub fn set_output<W: Write + Send + 'static>(&self, out: W) -> Sink {
        self.set_sink(Box::new(out))
    }

    pub fn set_sink(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut self.state.lock().out, sink)
    }

    pub fn set_level(&self, level: LogLevel) {
        self.set_raw_level(level as u32);
    }

    /// Store a numeric threshold without validation.
    ///
    /// Values past [`LogLevel::Debug`] enable every level.
    pub fn set_raw_level(&self, raw: u32) {
        self.level.store(raw, Ordering::Relaxed);
    }

    /// Current threshold, or `None` if an out-of-range value was stored.
    pub fn level(&self) -> Option<LogLevel> {
        LogLevel::from_u32(self.raw_level())
    }

    #[inline]
    pub fn raw_level(&self) -> u32 {
        self.level.load(Ordering::Relaxed)
    }

    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state.lock().prefix = prefix.into();
    }

    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled(self.raw_level())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[track_caller]
    fn emit(&self, level: LogLevel, message: Message<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        let mut line = String::from(level.tag());
        message.render(&mut line);
        self.write(Location::caller(), &line);
    }

    #[track_caller]
    fn emit_fatal(&self, message: Message<'_>) {
        if !self.is_enabled(LogLevel::Fatal) {
            return;
        }
        self.emit(LogLevel::Fatal, message);
        self.flush_sink();
        (self.on_exit)(FATAL_EXIT_CODE);
    }

    #[track_caller]
    fn emit_panic(&self, message: Message<'_>) -> Result<(), LoggedPanic> {
        let mut text = String::new();
        message.render(&mut text);
        if self.is_enabled(LogLevel::Panic) {
            let tag = LogLevel::Panic.tag();
            let mut line = String::with_capacity(tag.len() + text.len());
            line.push_str(tag);
            line.push_str(&text);
            self.write(Location::caller(), &line);
        }
        Err(LoggedPanic::new(text))
    }

    /// Format a header for `message` and hand the finished line to the sink.
    ///
    /// Sink errors are reported on stderr and otherwise swallowed.
    fn write(&self, location: &'static Location<'static>, message: &str) {
        let now = self.clock.now();
        let flags = self.flags();
        let site = flags
            .has_location()
            .then(|| (location.file(), location.line()));
        let stamp = if flags.contains(Flags::UTC) || !flags.has_timestamp() {
            now.naive_utc()
        } else {
            now.with_timezone(&Local).naive_local()
        };

        let result = {
            let mut state = self.state.lock();
            let State { out, prefix, buf } = &mut *state;
            buf.clear();
            header::format_header(buf, flags, &stamp, site, prefix);
            buf.extend_from_slice(message.as_bytes());
            if !message.ends_with('\n') {
                buf.push(b'\n');
            }
            out.write_all(buf)
        };

        match result {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                eprintln!(
                    "[LOGGER ERROR] Failed to write to log: {}",
                    LoggerError::io_operation("writing log line", e)
                );
            }
        }
    }

    fn flush_sink(&self) {
        let result = self.state.lock().out.flush();
        if let Err(e) = result {
            eprintln!(
                "[LOGGER ERROR] Failed to flush log: {}",
                LoggerError::io_operation("flushing sink", e)
            );
        }
    }

    /// Log operands at debug level, spacing only between non-text neighbours.
    #[track_caller]
    pub fn debug(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Debug, Message::Print(operands));
    }

    /// Log a `format_args!` message at debug level.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, Message::Format(args));
    }

    /// Log space-separated operands at debug level.
    #[track_caller]
    pub fn debugln(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Debug, Message::Line(operands));
    }

    #[track_caller]
    pub fn info(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Info, Message::Print(operands));
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, Message::Format(args));
    }

    #[track_caller]
    pub fn infoln(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Info, Message::Line(operands));
    }

    #[track_caller]
    pub fn warn(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Warn, Message::Print(operands));
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warn, Message::Format(args));
    }

    #[track_caller]
    pub fn warnln(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Warn, Message::Line(operands));
    }

    #[track_caller]
    pub fn error(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Error, Message::Print(operands));
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, Message::Format(args));
    }

    #[track_caller]
    pub fn errorln(&self, operands: &[&dyn Operand]) {
        self.emit(LogLevel::Error, Message::Line(operands));
    }

    /// Log at fatal level, then call the exit handler with status 1.
    ///
    /// A call suppressed by the threshold does nothing, exit included. With
    /// the default handler an enabled call never returns.
    #[track_caller]
    pub fn fatal(&self, operands: &[&dyn Operand]) {
        self.emit_fatal(Message::Print(operands));
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit_fatal(Message::Format(args));
    }

    #[track_caller]
    pub fn fatalln(&self, operands: &[&dyn Operand]) {
        self.emit_fatal(Message::Line(operands));
    }

    /// Log at panic level and return the message as `Err(LoggedPanic)`.
    ///
    /// Propagate it with `?`; see [`recover`](crate::recover).
    #[track_caller]
    pub fn panic(&self, operands: &[&dyn Operand]) -> Result<(), LoggedPanic> {
        self.emit_panic(Message::Print(operands))
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> Result<(), LoggedPanic> {
        self.emit_panic(Message::Format(args))
    }

    #[track_caller]
    pub fn panicln(&self, operands: &[&dyn Operand]) -> Result<(), LoggedPanic> {
        self.emit_panic(Message::Line(operands))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &LogLevel::name_of(self.raw_level()))
            .field("flags", &format_args!("{}", self.flags()))
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use hrlog::prelude::*;
/// use std::sync::Arc;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .flags(Flags::NONE)
///     .prefix("[db] ")
///     .output(buffer.clone())
///     .exit_handler(Arc::new(|code| eprintln!("would exit with {}", code)))
///     .build();
///
/// logger.debugf(format_args!("hidden"));
/// logger.infof(format_args!("connected"));
/// assert_eq!(buffer.contents_string(), "[db] [INFO]: connected\n");
/// ```
pub struct LoggerBuilder {
    level: u32,
    flags: Flags,
    prefix: String,
    output: Option<Sink>,
    clock: Option<Arc<dyn Clock>>,
    on_exit: Option<ExitHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Debug as u32,
            flags: Flags::STANDARD,
            prefix: String::new(),
            output: None,
            clock: None,
            on_exit: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level as u32;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Write to `out` instead of stderr
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(self, out: W) -> Self {
        self.sink(Box::new(out))
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.output = Some(sink);
        self
    }

    /// Stamp lines with `clock` instead of the system time
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Replace the process-exiting fatal handler
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.on_exit = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            level: AtomicU32::new(self.level),
            flags: AtomicU32::new(self.flags.bits()),
            state: Mutex::new(State {
                out: self.output.unwrap_or_else(sinks::stderr),
                prefix: self.prefix,
                buf: Vec::with_capacity(256),
            }),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            on_exit: self.on_exit.unwrap_or_else(process_exit),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::sinks::SharedBuffer;
    use chrono::{TimeZone, Utc};
    use std::io;
    use std::sync::atomic::AtomicI32;

    fn bare_logger() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .flags(Flags::NONE)
            .output(buffer.clone())
            .exit_handler(Arc::new(|_| {}))
            .build();
        (logger, buffer)
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Some(LogLevel::Debug));
        assert_eq!(logger.flags(), Flags::STANDARD);
        assert_eq!(logger.prefix(), "");
    }

    #[test]
    fn test_line_without_header() {
        let (logger, buffer) = bare_logger();
        logger.set_prefix("P ");
        logger.warnf(format_args!("disk at {}%", 91));
        assert_eq!(buffer.contents_string(), "P [WARN]: disk at 91%\n");
    }

    #[test]
    fn test_three_call_styles() {
        let (logger, buffer) = bare_logger();
        logger.info(&[&"retry ", &3, &4]);
        logger.infof(format_args!("{}-{}", "a", 1));
        logger.infoln(&[&"a", &"b", &1]);
        assert_eq!(
            buffer.contents_string(),
            "[INFO]: retry 3 4\n[INFO]: a-1\n[INFO]: a b 1\n"
        );
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let (logger, buffer) = bare_logger();
        logger.errorf(format_args!("already terminated\n"));
        logger.errorf(format_args!("not terminated"));
        assert_eq!(
            buffer.contents_string(),
            "[ERROR]: already terminated\n[ERROR]: not terminated\n"
        );
    }

    #[test]
    fn test_threshold_filters_verbose_levels() {
        let (logger, buffer) = bare_logger();
        logger.set_level(LogLevel::Warn);

        logger.debugf(format_args!("d"));
        logger.infof(format_args!("i"));
        assert!(buffer.is_empty());

        logger.warnf(format_args!("w"));
        logger.errorf(format_args!("e"));
        assert_eq!(buffer.lines(), vec!["[WARN]: w", "[ERROR]: e"]);
        assert_eq!(logger.metrics().lines_written(), 2);
    }

    #[test]
    fn test_raw_level_accepts_out_of_range() {
        let (logger, buffer) = bare_logger();
        logger.set_raw_level(99);
        assert_eq!(logger.level(), None);

        logger.debugf(format_args!("still enabled"));
        assert_eq!(buffer.lines(), vec!["[DEBUG]: still enabled"]);
    }

    #[test]
    fn test_fixed_clock_header() {
        let buffer = SharedBuffer::new();
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap()
            + chrono::Duration::microseconds(42);
        let logger = Logger::builder()
            .flags(Flags::STANDARD | Flags::MICROSECONDS | Flags::UTC)
            .clock(FixedClock::new(at))
            .output(buffer.clone())
            .build();

        logger.infof(format_args!("tick"));
        assert_eq!(
            buffer.contents_string(),
            "2024/12/31 23:59:58.000042 [INFO]: tick\n"
        );
    }

    #[test]
    fn test_local_time_header_without_utc_flag() {
        let buffer = SharedBuffer::new();
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 5).unwrap()
            + chrono::Duration::microseconds(7);
        let logger = Logger::builder()
            .flags(Flags::STANDARD | Flags::MICROSECONDS)
            .clock(FixedClock::new(at))
            .output(buffer.clone())
            .build();

        logger.infof(format_args!("tock"));

        let local = at.with_timezone(&Local);
        let expected = format!("{} [INFO]: tock\n", local.format("%Y/%m/%d %H:%M:%S%.6f"));
        assert_eq!(buffer.contents_string(), expected);
    }

    #[test]
    fn test_short_file_points_at_call_site() {
        let (logger, buffer) = bare_logger();
        logger.set_flags(Flags::SHORT_FILE);

        let line = line!() + 1;
        logger.infof(format_args!("here"));

        assert_eq!(
            buffer.contents_string(),
            format!("logger.rs:{}: [INFO]: here\n", line)
        );
    }

    #[test]
    fn test_long_file_keeps_full_path() {
        let (logger, buffer) = bare_logger();
        logger.set_flags(Flags::LONG_FILE);

        let line = line!() + 1;
        logger.warn(&[&"x"]);

        let expected = format!("{}:{}: [WARN]: x\n", file!(), line);
        assert_eq!(buffer.contents_string(), expected);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let logger = Logger::builder()
            .flags(Flags::NONE)
            .output(BrokenSink)
            .build();

        logger.errorf(format_args!("lost"));
        logger.infoln(&[&"also lost"]);

        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_set_output_returns_previous_sink() {
        let (logger, first) = bare_logger();
        let second = SharedBuffer::new();

        logger.infof(format_args!("one"));
        let _previous = logger.set_output(second.clone());
        logger.infof(format_args!("two"));

        assert_eq!(first.lines(), vec!["[INFO]: one"]);
        assert_eq!(second.lines(), vec!["[INFO]: two"]);
    }

    #[test]
    fn test_fatal_writes_then_calls_exit_handler() {
        let code = Arc::new(AtomicI32::new(0));
        let seen = Arc::clone(&code);
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .flags(Flags::NONE)
            .output(buffer.clone())
            .exit_handler(Arc::new(move |c| seen.store(c, Ordering::SeqCst)))
            .build();

        logger.fatalf(format_args!("cannot continue"));

        assert_eq!(buffer.contents_string(), "[FATAL]: cannot continue\n");
        assert_eq!(code.load(Ordering::SeqCst), FATAL_EXIT_CODE);
    }

    #[test]
    fn test_suppressed_fatal_does_not_exit() {
        let code = Arc::new(AtomicI32::new(0));
        let seen = Arc::clone(&code);
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .level(LogLevel::Panic)
            .output(buffer.clone())
            .exit_handler(Arc::new(move |c| seen.store(c, Ordering::SeqCst)))
            .build();

        logger.fatal(&[&"quiet"]);
        logger.fatalf(format_args!("filtered"));

        assert!(buffer.is_empty());
        assert_eq!(code.load(Ordering::SeqCst), 0);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_panic_returns_untagged_message() {
        let (logger, buffer) = bare_logger();

        let err = logger.panicf(format_args!("bad index {}", 7)).unwrap_err();
        assert_eq!(err.message(), "bad index 7");
        assert_eq!(buffer.contents_string(), "[PANIC]: bad index 7\n");

        let err = logger.panicln(&[&"a", &1]).unwrap_err();
        assert_eq!(err.message(), "a 1\n");
    }

    #[test]
    fn test_failing_display_is_marked() {
        struct Faulty;

        impl fmt::Display for Faulty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("half")?;
                Err(fmt::Error)
            }
        }

        let (logger, buffer) = bare_logger();
        logger.errorf(format_args!("state={}", Faulty));
        assert_eq!(buffer.contents_string(), "[ERROR]: state=half%!(error)\n");
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_debug_output() {
        let (logger, _buffer) = bare_logger();
        logger.set_level(LogLevel::Error);
        let debug = format!("{:?}", logger);
        assert!(debug.contains("LevelError"));
        assert!(debug.contains("none"));
    }
}
