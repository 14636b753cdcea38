//! Client configuration

/// Client configuration for connecting to the catalog service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default | Meaning |
    /// |----------|---------|---------|
    /// | CONCH_SERVER_URL | http://localhost:3001 | Catalog service base URL |
    /// | CONCH_TIMEOUT_SECS | 30 | Request timeout in seconds |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CONCH_SERVER_URL").unwrap_or_else(|_| "http://localhost:3001".into());
        let timeout = std::env::var("CONCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a catalog client from this configuration
    pub fn build_client(&self) -> super::CatalogClient {
        super::CatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
