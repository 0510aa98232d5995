//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// File name prefix of the rolling log
const LOG_FILE_PREFIX: &str = "roster";

/// Initialize the logger writing under `log_dir`.
///
/// `RUST_LOG` overrides `log_level`. When the directory cannot be created,
/// logging is disabled rather than drawn over the UI.
pub fn init_logger(log_level: &str, log_dir: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let log_path = Path::new(log_dir);
    if !log_path.exists() && std::fs::create_dir_all(log_path).is_err() {
        return;
    }

    let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
