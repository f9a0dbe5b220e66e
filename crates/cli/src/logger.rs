//! Console logger for the driver.
//!
//! Implements the `log::Log` trait to route the core's log messages to
//! stderr, keeping stdout clean for demo output. Verbosity is chosen once
//! at startup from the `-v` flag count.

use log::{LevelFilter, Metadata, Record};

/// Global logger instance
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:>5}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Map a `-v` count onto a level filter.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the logger.
///
/// # Arguments
/// * `max_level` - The maximum log level to display.
pub fn init(max_level: LevelFilter) {
    // A second init (tests) is harmless; keep the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
