//! Error types for the API sandbox.
//!
//! This module provides a unified error type [`SandboxError`] that encompasses
//! all possible errors that can occur while fetching upstream data, decoding
//! responses, and sampling example queries.
//!
//! # Design
//!
//! The error hierarchy is organized by layer:
//! - [`SandboxError::ConfigError`]: Configuration and environment issues
//! - [`SandboxError::UpstreamError`]: Upstream HTTP and network errors
//! - [`SandboxError::DecodingError`]: Response decoding and parsing errors
//! - [`SandboxError::SamplerError`]: Query sampling errors
//!
//! All errors implement [`std::error::Error`] and include rich context via
//! the source error chain.
//!
//! # Example
//!
//! ```
//! use api_sandbox::error::{SandboxError, SandboxResult};
//!
//! fn validate_path(path: &str) -> SandboxResult<()> {
//!     if !path.starts_with('/') {
//!         return Err(SandboxError::sampler(
//!             "query path must start with '/'",
//!             None
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Result type alias using [`SandboxError`].
pub type SandboxResult<T> = Result<T, SandboxError>;

/// Unified error type for the API sandbox.
///
/// This enum encompasses all error types that can occur during:
/// - Configuration loading
/// - Upstream HTTP requests
/// - Response decoding
/// - Example-query sampling
#[derive(Debug)]
pub enum SandboxError {
    /// Configuration or environment variable errors.
    ///
    /// Variants include:
    /// - Missing or invalid environment variables
    /// - Invalid upstream URLs
    /// - Malformed configuration values
    ConfigError {
        /// Human-readable error message
        message: String,
        /// Optional underlying error
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Upstream HTTP or network errors.
    ///
    /// Variants include:
    /// - Failed to connect to the upstream API
    /// - Request timeout
    /// - Unexpected HTTP status
    UpstreamError {
        /// Human-readable error message
        message: String,
        /// Optional underlying error
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Response decoding or parsing errors.
    ///
    /// Variants include:
    /// - Invalid JSON in an upstream response
    /// - Missing required fields in metadata
    /// - Type mismatches in sample documents
    DecodingError {
        /// Human-readable error message
        message: String,
        /// Optional underlying error
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query sampling errors.
    ///
    /// Variants include:
    /// - Document with no sampleable fields
    /// - Invalid query path input
    SamplerError {
        /// Human-readable error message
        message: String,
        /// Optional underlying error
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SandboxError {
    /// Create a new configuration error.
    ///
    /// # Example
    ///
    /// ```
    /// use api_sandbox::error::SandboxError;
    ///
    /// let err = SandboxError::config("UPSTREAM_URL must use http or https", None);
    /// assert!(matches!(err, SandboxError::ConfigError { .. }));
    /// ```
    #[must_use]
    pub fn config(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source,
        }
    }

    /// Create a new upstream error.
    ///
    /// # Example
    ///
    /// ```
    /// use api_sandbox::error::SandboxError;
    ///
    /// let err = SandboxError::upstream("Failed to reach upstream API", None);
    /// assert!(matches!(err, SandboxError::UpstreamError { .. }));
    /// ```
    #[must_use]
    pub fn upstream(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::UpstreamError {
            message: message.into(),
            source,
        }
    }

    /// Create a new decoding error.
    ///
    /// # Example
    ///
    /// ```
    /// use api_sandbox::error::SandboxError;
    ///
    /// let err = SandboxError::decoding("Metadata response is not an object", None);
    /// assert!(matches!(err, SandboxError::DecodingError { .. }));
    /// ```
    #[must_use]
    pub fn decoding(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DecodingError {
            message: message.into(),
            source,
        }
    }

    /// Create a new sampler error.
    ///
    /// # Example
    ///
    /// ```
    /// use api_sandbox::error::SandboxError;
    ///
    /// let err = SandboxError::sampler("document has no sampleable fields", None);
    /// assert!(matches!(err, SandboxError::SamplerError { .. }));
    /// ```
    #[must_use]
    pub fn sampler(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SamplerError {
            message: message.into(),
            source,
        }
    }
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError { message, .. } => write!(f, "Configuration error: {message}"),
            Self::UpstreamError { message, .. } => write!(f, "Upstream error: {message}"),
            Self::DecodingError { message, .. } => write!(f, "Decoding error: {message}"),
            Self::SamplerError { message, .. } => write!(f, "Sampler error: {message}"),
        }
    }
}

impl std::error::Error for SandboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigError { source, .. }
            | Self::UpstreamError { source, .. }
            | Self::DecodingError { source, .. }
            | Self::SamplerError { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &dyn std::error::Error),
        }
    }
}

/// Convert from `eyre::Report` to `SandboxError`.
///
/// This is primarily used for wrapping eyre errors that don't fit into
/// a specific category. The error is categorized as an upstream error
/// by default.
impl From<eyre::Report> for SandboxError {
    fn from(err: eyre::Report) -> Self {
        Self::UpstreamError {
            message: err.to_string(),
            source: None,
        }
    }
}

/// Convert transport-level `reqwest` failures into upstream errors.
impl From<reqwest::Error> for SandboxError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Convert JSON parsing failures into decoding errors.
impl From<serde_json::Error> for SandboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodingError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error() {
        let err = SandboxError::config("test error", None);
        assert!(matches!(err, SandboxError::ConfigError { .. }));
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_upstream_error() {
        let err = SandboxError::upstream("connection failed", None);
        assert!(matches!(err, SandboxError::UpstreamError { .. }));
        assert_eq!(err.to_string(), "Upstream error: connection failed");
    }

    #[test]
    fn test_decoding_error() {
        let err = SandboxError::decoding("invalid metadata", None);
        assert!(matches!(err, SandboxError::DecodingError { .. }));
        assert_eq!(err.to_string(), "Decoding error: invalid metadata");
    }

    #[test]
    fn test_sampler_error() {
        let err = SandboxError::sampler("no sampleable fields", None);
        assert!(matches!(err, SandboxError::SamplerError { .. }));
        assert_eq!(err.to_string(), "Sampler error: no sampleable fields");
    }

    #[test]
    fn test_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SandboxError::config("failed to load", Some(Box::new(source)));

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Configuration error: failed to load");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json")
            .err()
            .map(SandboxError::from);
        assert!(matches!(
            json_err,
            Some(SandboxError::DecodingError { .. })
        ));
    }

    #[test]
    fn test_error_trait() {
        let err = SandboxError::upstream("test", None);
        // Ensure it implements Error trait
        let _: &dyn std::error::Error = &err;
    }
}
