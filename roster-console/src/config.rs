//! Console configuration

use roster_client::ClientConfig;

use crate::router::LIST_PATH;

/// Console configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend connection
    pub api: ClientConfig,
    /// Directory of the rolling log file
    pub log_dir: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Path opened at startup
    pub start_path: String,
}

impl Config {
    /// Read `ROSTER_*` variables; the first command-line argument, when
    /// present, is the start path.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), std::env::args().nth(1))
    }

    /// Build from a variable lookup and an optional start path
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>, start_path: Option<String>) -> Self {
        Self {
            api: ClientConfig::from_lookup(&var),
            log_dir: var("ROSTER_LOG_DIR").unwrap_or_else(|| "./logs".into()),
            log_level: var("ROSTER_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            start_path: start_path.unwrap_or_else(|| LIST_PATH.to_string()),
        }
    }
}
