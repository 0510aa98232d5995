//! Client configuration

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration for connecting to the employee backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080"); the `/employees`
    /// paths are appended to it
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Read `ROSTER_API_URL` and `ROSTER_API_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary variable lookup.
    /// An unparsable timeout is ignored.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("ROSTER_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = var("ROSTER_API_TIMEOUT_SECS").and_then(|v| v.parse().ok());
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create the employee access layer from this configuration
    pub fn build_employee_service(
        &self,
    ) -> crate::ClientResult<crate::EmployeeService<crate::NetworkHttpClient>> {
        crate::EmployeeService::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
