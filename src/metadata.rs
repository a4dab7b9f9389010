//! Upstream API metadata model and derivations.
//!
//! A pending API describes itself through a metadata document: a map of data
//! sources (each with version, provenance links, and per-source document
//! counts), the entity type it serves, and optionally a curated list of
//! static example queries.
//!
//! Two derivations drive the sandbox flow:
//! - [`Metadata::total_documents`] decides whether sample scanning is
//!   affordable or the static examples should be used instead;
//! - [`Metadata::entity_type`] names the direct-lookup path segment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata document describing a pending API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Data sources feeding the API, keyed by source name.
    #[serde(default)]
    pub src: BTreeMap<String, SourceInfo>,

    /// Entity type served by the API (e.g., "gene", "variant").
    #[serde(default)]
    pub biothing_type: Option<String>,

    /// Legacy name for the entity type, still emitted by older APIs.
    #[serde(default)]
    pub doc_type: Option<String>,

    /// Curated example queries provided by the API maintainer.
    #[serde(default)]
    pub example_queries: Option<Vec<String>>,
}

/// One data source entry in the metadata `src` map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source data version.
    #[serde(default)]
    pub version: Option<String>,

    /// Source maintainer.
    #[serde(default)]
    pub author: Option<String>,

    /// Source home page.
    #[serde(default)]
    pub url: Option<String>,

    /// Parser code reference.
    #[serde(default)]
    pub code: Option<CodeInfo>,

    /// Source data license.
    #[serde(default)]
    pub license_url: Option<String>,

    /// Human-readable source description.
    #[serde(default)]
    pub description: Option<String>,

    /// Per-source document counts, keyed by source name.
    #[serde(default)]
    pub stats: BTreeMap<String, u64>,
}

/// Parser code reference for a data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeInfo {
    /// Repository or file URL of the parser.
    #[serde(default)]
    pub url: Option<String>,
}

impl Metadata {
    /// Total document count declared across all sources.
    #[must_use]
    pub fn total_documents(&self) -> u64 {
        self.src
            .values()
            .flat_map(|source| source.stats.values())
            .sum()
    }

    /// Entity type served by the API.
    ///
    /// Prefers `biothing_type`, falls back to the legacy `doc_type`, and
    /// defaults to `"doc"` when neither is declared.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        self.biothing_type
            .as_deref()
            .or_else(|| self.doc_type.as_deref())
            .unwrap_or("doc")
    }

    /// Curated static example queries, empty when none are declared.
    #[must_use]
    pub fn static_examples(&self) -> &[String] {
        self.example_queries.as_deref().unwrap_or(&[])
    }
}
