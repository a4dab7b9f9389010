//! Metadata summary endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::api::handlers::validate_api_name;
use crate::api::middleware::error::ApiError;
use crate::api::models::{MetadataSummary, SourceSummary};
use crate::app_state::AppState;
use crate::metadata::Metadata;

#[utoipa::path(
    get,
    path = "/api/v1/apis/{api}/metadata",
    params(
        ("api" = String, Path, description = "API identifier (e.g., mygene)")
    ),
    responses(
        (status = 200, description = "Metadata summary", body = MetadataSummary),
        (status = 404, description = "API not found")
    ),
    tag = "Metadata"
)]
/// Returns a summary of the API's metadata.
#[instrument(skip(state), fields(api = %api))]
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(api): Path<String>,
) -> Result<Json<MetadataSummary>, ApiError> {
    validate_api_name(&api)?;

    let metadata = state
        .upstream
        .fetch_metadata(&api)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("API {api} not found on upstream host")))?;

    let summary = summarize(&api, &metadata);

    info!(
        entity_type = %summary.entity_type,
        total_documents = summary.total_documents,
        sources = summary.sources.len(),
        "Metadata summarized"
    );

    Ok(Json(summary))
}

/// Flatten a metadata document into the summary the landing view renders.
fn summarize(api: &str, metadata: &Metadata) -> MetadataSummary {
    let sources = metadata
        .src
        .iter()
        .map(|(name, source)| SourceSummary {
            name: name.clone(),
            version: source.version.clone(),
            documents: source.stats.values().sum(),
            url: source.url.clone(),
            license_url: source.license_url.clone(),
            description: source.description.clone(),
        })
        .collect();

    MetadataSummary {
        api: api.to_string(),
        entity_type: metadata.entity_type().to_string(),
        total_documents: metadata.total_documents(),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_flattens_sources() {
        let metadata: Metadata = serde_json::from_value(json!({
            "biothing_type": "gene",
            "src": {
                "entrez": {"version": "2024-01", "stats": {"entrez": 100u64}},
                "ensembl": {"stats": {"ensembl": 50u64}}
            }
        }))
        .unwrap_or_default();

        let summary = summarize("mygene", &metadata);
        assert_eq!(summary.api, "mygene");
        assert_eq!(summary.entity_type, "gene");
        assert_eq!(summary.total_documents, 150);
        assert_eq!(summary.sources.len(), 2);
    }
}
