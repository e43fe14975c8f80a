//! Basic logger usage example
//!
//! Demonstrates the three call styles, level filtering, header flags and the
//! process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use hrlog::prelude::*;
use hrlog::{infof, operands, warnf};

fn main() {
    println!("=== hrlog - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .flags(Flags::STANDARD | Flags::SHORT_FILE)
        .prefix("[demo] ")
        .build();

    println!("1. The three call styles:");
    logger.info(operands!["items=", 3, 4, 5]);
    logger.infoln(operands!["items", 3, 4, 5]);
    infof!(logger, "processed {} items in {}ms", 3, 12);

    println!("\n2. Threshold set to WARN - debug and info are dropped:");
    logger.set_level(LogLevel::Warn);
    logger.debugf(format_args!("hidden"));
    logger.infof(format_args!("hidden"));
    warnf!(logger, "disk at {}%", 91);
    logger.errorf(format_args!("write failed"));

    println!("\n3. Microsecond UTC timestamps without file info:");
    logger.set_flags(Flags::STANDARD | Flags::MICROSECONDS | Flags::UTC);
    logger.warnf(format_args!("precise"));

    println!("\n4. Default logger through free functions:");
    hrlog::set_prefix("[global] ");
    hrlog::infof(format_args!("no setup needed"));

    println!("\n5. Panic-level calls return an error that can be recovered:");
    let outcome = hrlog::recover(|| {
        logger.panicf(format_args!("shard {} missing", 7))?;
        Ok(())
    });
    if let Err(logged) = outcome {
        println!("   recovered: {}", logged);
    }

    println!("\n=== Example completed successfully! ===");
}
