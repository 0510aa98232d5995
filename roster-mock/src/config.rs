//! Mock backend configuration

/// Mock backend configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub port: u16,
    /// Start with a few sample employees
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("ROSTER_MOCK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed: std::env::var("ROSTER_MOCK_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
