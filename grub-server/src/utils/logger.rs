//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this twice is
/// harmless: the second call keeps the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .and_then(|path| path.to_str())
        .map(|dir| tracing_appender::rolling::daily(dir, "grub-server"));

    let result = match (json.unwrap_or(false), file_appender) {
        (true, Some(writer)) => builder.json().with_writer(writer).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(writer)) => builder.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => builder.try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
