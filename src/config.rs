//! Configuration management for the API sandbox.
//!
//! This module handles loading and validating configuration from environment variables
//! using the `dotenvy` crate. All operations return [`SandboxResult`] for comprehensive
//! error handling.
//!
//! ## Environment Variables
//!
//! All optional (with defaults):
//! - `UPSTREAM_URL`: Base URL of the upstream API host (default: "http://localhost:8000")
//! - `PORT`: Port for the sandbox web server (default: 8080)
//! - `SAMPLE_PAGE_SIZE`: Number of sample documents fetched per batch (default: 10)
//! - `EXAMPLE_PICKS`: Random document picks per example-query generation (default: 8)
//! - `REQUEST_TIMEOUT_SECS`: Upstream request timeout (default: 30)
//! - `RATE_LIMIT_RPM`: Requests per minute allowed by the API layer (default: 120)
//! - `CORS_ORIGINS`: Comma-separated allowed origins (default: "*")
//! - `RUST_LOG`: Logging level (default: "info")
//!
//! ## Example
//!
//! ```no_run
//! use api_sandbox::config::Config;
//! use api_sandbox::error::SandboxResult;
//!
//! # fn main() -> SandboxResult<()> {
//! let config = Config::from_env()?;
//! println!("Upstream: {}", config.upstream_url());
//! # Ok(())
//! # }
//! ```

use crate::error::{SandboxError, SandboxResult};
use std::env;

/// Main configuration struct for the sandbox.
///
/// Contains all runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream API host
    upstream_url: String,

    /// Port for the sandbox web server
    port: u16,

    /// Number of sample documents fetched per batch
    sample_page_size: u32,

    /// Random document picks per example-query generation
    example_picks: u32,

    /// Upstream request timeout in seconds
    request_timeout_secs: u64,

    /// Requests per minute allowed by the API layer
    rate_limit_rpm: u32,

    /// Allowed CORS origins
    cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This function:
    /// 1. Loads `.env` file using `dotenvy` (if present)
    /// 2. Reads all environment variables
    /// 3. Applies defaults for unset variables
    /// 4. Validates the upstream base URL
    ///
    /// The default upstream of `http://localhost:8000` matches the common case
    /// of trying an API hosted on the local machine; deployed instances point
    /// `UPSTREAM_URL` at the public API host instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Numeric environment variables fail to parse
    /// - `UPSTREAM_URL` does not use the http or https scheme
    ///
    /// # Example
    ///
    /// ```no_run
    /// use api_sandbox::config::Config;
    /// use api_sandbox::error::SandboxResult;
    ///
    /// # fn main() -> SandboxResult<()> {
    /// let config = Config::from_env()?;
    /// println!("Configuration loaded successfully");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> SandboxResult<Self> {
        // Load .env file if present (ignore error if file doesn't exist)
        dotenvy::dotenv().ok();

        // Optional: Upstream base URL (default: local API host)
        let upstream_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        if !upstream_url.starts_with("http://") && !upstream_url.starts_with("https://") {
            return Err(SandboxError::config(
                format!("UPSTREAM_URL must start with http:// or https://, got: {upstream_url}"),
                None,
            ));
        }

        // Optional: Server port (default: 8080)
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| {
                SandboxError::config("PORT must be a valid port number", Some(Box::new(e)))
            })?;

        // Optional: Sample page size (default: 10 documents)
        let sample_page_size = env::var("SAMPLE_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|e| {
                SandboxError::config(
                    "SAMPLE_PAGE_SIZE must be a valid number",
                    Some(Box::new(e)),
                )
            })?;

        if sample_page_size == 0 {
            return Err(SandboxError::config(
                "SAMPLE_PAGE_SIZE must be at least 1",
                None,
            ));
        }

        // Optional: Example picks, the default pick count for both the CLI
        // and the /examples endpoint when no count is given
        let example_picks = env::var("EXAMPLE_PICKS")
            .unwrap_or_else(|_| crate::suggest::DEFAULT_PICKS.to_string())
            .parse::<u32>()
            .map_err(|e| {
                SandboxError::config("EXAMPLE_PICKS must be a valid number", Some(Box::new(e)))
            })?;

        // Optional: Request timeout (default: 30 seconds)
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|e| {
                SandboxError::config(
                    "REQUEST_TIMEOUT_SECS must be a valid number",
                    Some(Box::new(e)),
                )
            })?;

        // Optional: Rate limit (default: 120 requests per minute)
        let rate_limit_rpm = env::var("RATE_LIMIT_RPM")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u32>()
            .map_err(|e| {
                SandboxError::config("RATE_LIMIT_RPM must be a valid number", Some(Box::new(e)))
            })?;

        // Optional: CORS origins (default: allow any)
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            upstream_url,
            port,
            sample_page_size,
            example_picks,
            request_timeout_secs,
            rate_limit_rpm,
            cors_origins,
        })
    }

    /// Get the upstream API base URL.
    #[must_use]
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Get the sandbox web server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Get the sample page size (documents fetched per batch).
    #[must_use]
    pub const fn sample_page_size(&self) -> u32 {
        self.sample_page_size
    }

    /// Get the number of random picks per example-query generation.
    #[must_use]
    pub const fn example_picks(&self) -> u32 {
        self.example_picks
    }

    /// Get the upstream request timeout in seconds.
    #[must_use]
    pub const fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    /// Get the rate limit in requests per minute.
    #[must_use]
    pub const fn rate_limit_rpm(&self) -> u32 {
        self.rate_limit_rpm
    }

    /// Get the allowed CORS origins.
    #[must_use]
    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so all scenarios run
    // sequentially inside one test to avoid cross-test races.
    #[test]
    fn test_config_from_env_scenarios() {
        // Clean up any existing env vars
        env::remove_var("UPSTREAM_URL");
        env::remove_var("PORT");
        env::remove_var("SAMPLE_PAGE_SIZE");
        env::remove_var("EXAMPLE_PICKS");

        // Defaults
        let config = Config::from_env();
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.upstream_url(), "http://localhost:8000");
            assert_eq!(config.port(), 8080);
            assert_eq!(config.example_picks(), 8);
            assert_eq!(config.sample_page_size(), 10);
            assert_eq!(config.rate_limit_rpm(), 120);
        }

        // Trailing slash is stripped from the upstream URL
        env::set_var("UPSTREAM_URL", "https://api.example.org/");
        let config = Config::from_env();
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.upstream_url(), "https://api.example.org");
        }

        // Non-http(s) schemes are rejected
        env::set_var("UPSTREAM_URL", "ftp://example.org");
        assert!(Config::from_env().is_err());
        env::remove_var("UPSTREAM_URL");

        // Zero page size is rejected
        env::set_var("SAMPLE_PAGE_SIZE", "0");
        assert!(Config::from_env().is_err());
        env::remove_var("SAMPLE_PAGE_SIZE");

        // EXAMPLE_PICKS overrides the default pick count
        env::set_var("EXAMPLE_PICKS", "20");
        let config = Config::from_env();
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.example_picks(), 20);
        }
        env::remove_var("EXAMPLE_PICKS");

        // Non-numeric port is rejected
        env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        env::remove_var("PORT");
    }
}
