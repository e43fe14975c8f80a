//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from many threads never interleave in a shared sink
//! - Configuration can change while other threads are logging
//! - Several loggers can share one sink

use hrlog::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 16;
const PER_THREAD: usize = 500;

fn capture() -> (Arc<Logger>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .flags(Flags::NONE)
        .output(buffer.clone())
        .build();
    (Arc::new(logger), buffer)
}

/// Fixed-width payload so a torn line would change its length.
fn payload(thread: usize, seq: usize) -> String {
    format!("t{:02}-m{:04}-{}", thread, seq, "x".repeat(48))
}

#[test]
fn test_concurrent_lines_never_interleave() {
    let (logger, buffer) = capture();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.infof(format_args!("{}", payload(t, i)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let expected_len = "[INFO]: ".len() + payload(0, 0).len();
    let mut seen = HashSet::new();
    for line in &lines {
        assert_eq!(line.len(), expected_len, "corrupted line: {:?}", line);
        assert!(line.starts_with("[INFO]: t"), "corrupted line: {:?}", line);
        assert!(seen.insert(line.clone()), "duplicated line: {:?}", line);
    }
    assert_eq!(logger.metrics().lines_written(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_configuration_changes_during_logging() {
    let (logger, buffer) = capture();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.warnf(format_args!("{}", payload(t, i)));
                }
            })
        })
        .collect();

    let configurer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..200 {
                logger.set_level(if i % 2 == 0 { LogLevel::Error } else { LogLevel::Debug });
                logger.set_prefix(if i % 2 == 0 { "even " } else { "odd! " });
            }
            logger.set_level(LogLevel::Debug);
        })
    };

    for handle in writers {
        handle.join().expect("logging thread panicked");
    }
    configurer.join().expect("config thread panicked");

    // Suppressed calls write nothing, emitted ones are always whole lines.
    for line in buffer.lines() {
        assert!(
            line.starts_with("even [WARN]: t") || line.starts_with("odd! [WARN]: t")
                || line.starts_with("[WARN]: t"),
            "corrupted line: {:?}",
            line
        );
    }
    assert_eq!(
        buffer.lines().len() as u64,
        logger.metrics().lines_written()
    );
}

#[test]
fn test_loggers_sharing_a_sink() {
    let buffer = SharedBuffer::new();
    let loggers: Vec<Arc<Logger>> = ["a ", "b "]
        .iter()
        .map(|prefix| {
            Arc::new(
                Logger::builder()
                    .flags(Flags::NONE)
                    .prefix(*prefix)
                    .output(buffer.clone())
                    .build(),
            )
        })
        .collect();

    let handles: Vec<_> = loggers
        .iter()
        .enumerate()
        .map(|(t, logger)| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.errorf(format_args!("{}", payload(t, i)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2 * PER_THREAD);
    assert_eq!(lines.iter().filter(|l| l.starts_with("a [ERROR]: t00")).count(), PER_THREAD);
    assert_eq!(lines.iter().filter(|l| l.starts_with("b [ERROR]: t01")).count(), PER_THREAD);
}
