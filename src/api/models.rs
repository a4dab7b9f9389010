//! API request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Summary of a pending API for the sandbox landing view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetadataSummary {
    /// API identifier (path segment on the upstream host)
    pub api: String,
    /// Entity type served by the API (e.g., "gene")
    pub entity_type: String,
    /// Total document count declared across all sources
    pub total_documents: u64,
    /// Data sources feeding the API
    pub sources: Vec<SourceSummary>,
}

/// One data source entry in a metadata summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceSummary {
    /// Source name
    pub name: String,
    /// Source data version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Documents contributed by this source
    pub documents: u64,
    /// Source home page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source data license
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    /// Human-readable source description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query parameters for example-query generation.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ExamplesQuery {
    /// Number of random document picks with replacement
    /// (default: the `EXAMPLE_PICKS` configuration)
    #[serde(default)]
    pub count: Option<u32>,
    /// Optional RNG seed for reproducible example lists
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Generated example queries for an API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamplesResponse {
    /// API identifier
    pub api: String,
    /// Entity type served by the API
    pub entity_type: String,
    /// Total document count declared across all sources
    pub total_documents: u64,
    /// Whether metadata-provided static examples were used instead of
    /// scanning sample documents
    pub from_static: bool,
    /// Example query paths, ready to submit
    pub examples: Vec<String>,
}

/// Query parameters for query execution.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TryQuery {
    /// Query path to execute against the API, e.g. `/query?q=symbol:BRCA1`
    pub path: String,
}

/// Result of executing a query path against the upstream API.
///
/// Success and error bodies are carried identically; `ok` exists for
/// styling only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TryResponse {
    /// API identifier
    pub api: String,
    /// Executed query path
    pub path: String,
    /// Whether the upstream responded with a 2xx status
    pub ok: bool,
    /// HTTP status code of the upstream response
    pub status: u16,
    /// Round-trip time in milliseconds
    pub elapsed_ms: u64,
    /// Upstream response body (success or error), rendered as-is
    #[schema(value_type = Object)]
    pub body: Value,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Upstream API base URL
    pub upstream_url: String,
    /// Upstream reachability
    pub upstream_status: String,
    /// Report timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health status states.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Upstream reachable
    Healthy,
    /// Upstream unreachable; cached/static views only
    Degraded,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Optional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_query_defaults() {
        // An absent count is deferred to the EXAMPLE_PICKS configuration,
        // so deserialization must not invent one
        let query: ExamplesQuery = serde_json::from_str("{}").unwrap_or(ExamplesQuery {
            count: Some(0),
            seed: None,
        });
        assert_eq!(query.count, None);
        assert_eq!(query.seed, None);
    }

    #[test]
    fn test_try_response_serializes_body_verbatim() {
        let response = TryResponse {
            api: "mygene".to_string(),
            path: "/query?q=symbol:BRCA1".to_string(),
            ok: false,
            status: 400,
            elapsed_ms: 12,
            body: serde_json::json!({"error": "bad query"}),
        };

        let rendered = serde_json::to_string(&response).unwrap_or_default();
        assert!(rendered.contains(r#""ok":false"#));
        assert!(rendered.contains(r#""error":"bad query""#));
    }
}
