//! Logging Infrastructure
//!
//! Structured logging setup for the storefront binary.

use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;

/// Log file prefix inside `LOG_DIR`
const LOG_FILE_PREFIX: &str = "storefront";

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(file_appender) = log_dir.and_then(daily_appender) {
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

/// Daily rolling appender for an existing directory, `None` otherwise
fn daily_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if !log_path.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX))
}
