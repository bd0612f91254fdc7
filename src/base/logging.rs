use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to the standard error stream
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARNING",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "[{} {}] {}", tag, record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger with the given maximum level
///
/// Calling this function more than once only updates the maximum level.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
