//! Client Configuration
//!
//! The backend location is fixed at build time, the same way the browser
//! bundle bakes in its environment.

use std::time::Duration;

/// Backend used when `LOGISTICA_API_URL` is unset or blank.
pub const DEFAULT_BASE_URL: &str = "https://logistica-backend-3nzk.onrender.com";

/// Versioned root every route hangs off.
pub const API_PREFIX: &str = "/api/v1";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how the API client talks to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host root without the `/api/v1` prefix, no trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `LOGISTICA_API_URL` as captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LOGISTICA_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full root for API routes, e.g. `https://host/api/v1`
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
