//! Upstream HTTP client for the pending API.
//!
//! Thin request/response layer over `reqwest`. Three operations cover the
//! whole sandbox flow:
//!
//! - [`UpstreamClient::fetch_metadata`]: `GET {base}/{api}/metadata`
//! - [`UpstreamClient::fetch_samples`]: `GET {base}/{api}/query?q=__all__&from={n}&size={m}`
//! - [`UpstreamClient::run_query`]: `GET {base}/{api}{path}` for a user-selected path
//!
//! Transport failures (connection refused, timeout) surface as
//! [`SandboxError::UpstreamError`]. HTTP-level failures on `run_query` are
//! NOT errors: the error body is part of the result and is rendered the same
//! way as a success body, distinguished only by the [`QueryOutcome::ok`]
//! flag.

use crate::error::{SandboxError, SandboxResult};
use crate::metadata::Metadata;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// One page of sample documents from the upstream query endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplePage {
    /// Sample documents returned for this page.
    #[serde(default)]
    pub hits: Vec<Value>,
}

/// Result of executing a user-selected query path.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// Whether the upstream responded with a 2xx status.
    pub ok: bool,
    /// HTTP status code of the upstream response.
    pub status: u16,
    /// Response body. Non-JSON bodies are wrapped as a JSON string so the
    /// caller can always render through the same viewer.
    pub body: Value,
}

/// HTTP client bound to one upstream API host.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base: String,
}

impl UpstreamClient {
    /// Create a client for the given base URL with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base: impl Into<String>, timeout: Duration) -> SandboxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                SandboxError::upstream("failed to build HTTP client", Some(Box::new(e)))
            })?;

        Ok(Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    /// The upstream base URL this client is bound to.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Probe the upstream host.
    ///
    /// Any HTTP response counts as reachable; only transport failures are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream host cannot be reached.
    pub async fn ping(&self) -> SandboxResult<()> {
        self.client
            .get(&self.base)
            .send()
            .await
            .map_err(|e| {
                SandboxError::upstream(
                    format!("upstream host {} unreachable: {e}", self.base),
                    Some(Box::new(e)),
                )
            })?;
        Ok(())
    }

    /// Fetch and decode the metadata document for an API.
    ///
    /// Returns `Ok(None)` when the upstream answers 404, which the caller
    /// presents as the "not found" state for an invalid API identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-404 error status, or the body is not a valid metadata document.
    #[instrument(skip(self))]
    pub async fn fetch_metadata(&self, api: &str) -> SandboxResult<Option<Metadata>> {
        let url = format!("{}/{api}/metadata", self.base);
        debug!(url, "fetching metadata");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(api, "upstream has no such API");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SandboxError::upstream(
                format!("metadata fetch for {api} returned {status}"),
                None,
            ));
        }

        let metadata = response.json::<Metadata>().await.map_err(|e| {
            SandboxError::decoding(
                format!("invalid metadata document for {api}"),
                Some(Box::new(e)),
            )
        })?;

        Ok(Some(metadata))
    }

    /// Fetch one page of sample documents via the match-all query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with an
    /// error status, or the body is not a `{hits: [...]}` page.
    #[instrument(skip(self))]
    pub async fn fetch_samples(
        &self,
        api: &str,
        from: u32,
        size: u32,
    ) -> SandboxResult<Vec<Value>> {
        let url = format!(
            "{}/{api}/query?q=__all__&from={from}&size={size}",
            self.base
        );
        debug!(url, "fetching sample documents");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SandboxError::upstream(
                format!("sample fetch for {api} returned {status}"),
                None,
            ));
        }

        let page = response.json::<SamplePage>().await.map_err(|e| {
            SandboxError::decoding(
                format!("invalid sample page for {api}"),
                Some(Box::new(e)),
            )
        })?;

        debug!(count = page.hits.len(), "sample documents fetched");
        Ok(page.hits)
    }

    /// Execute a user-selected query path against the API.
    ///
    /// The path must start with `/` (e.g. `/query?q=symbol:BRCA1` or
    /// `/gene/1017`). Success and error bodies come back identically; the
    /// [`QueryOutcome::ok`] flag is for styling only.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; HTTP error statuses are
    /// reported through the outcome.
    #[instrument(skip(self))]
    pub async fn run_query(&self, api: &str, path: &str) -> SandboxResult<QueryOutcome> {
        let url = format!("{}/{api}{path}", self.base);
        debug!(url, "executing query");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        let text = response.text().await.map_err(|e| {
            SandboxError::upstream(
                format!("failed to read query response for {api}"),
                Some(Box::new(e)),
            )
        })?;

        // Error bodies are frequently JSON too; anything else is wrapped as
        // a plain string so the viewer always gets a JSON value
        let body = serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text));

        Ok(QueryOutcome {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = UpstreamClient::new("http://localhost:8000/", Duration::from_secs(5));
        assert!(client.is_ok());

        if let Ok(client) = client {
            assert_eq!(client.base(), "http://localhost:8000");
        }
    }

    #[test]
    fn test_sample_page_decodes_missing_hits() {
        let page: SamplePage = serde_json::from_str("{}").unwrap_or_default();
        assert!(page.hits.is_empty());
    }

    #[test]
    fn test_sample_page_decodes_hits() {
        let page: SamplePage =
            serde_json::from_str(r#"{"hits": [{"_id": "1"}], "total": 1}"#).unwrap_or_default();
        assert_eq!(page.hits.len(), 1);
    }
}
