//! Example-query generation endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, instrument};

use crate::api::handlers::validate_api_name;
use crate::api::middleware::error::ApiError;
use crate::api::models::{ExamplesQuery, ExamplesResponse};
use crate::app_state::AppState;
use crate::suggest;

/// Upper bound on random picks per request; generation is cheap but each
/// request costs one upstream round trip for the sample page.
const MAX_PICKS: u32 = 50;

#[utoipa::path(
    get,
    path = "/api/v1/apis/{api}/examples",
    params(
        ("api" = String, Path, description = "API identifier (e.g., mygene)"),
        ExamplesQuery
    ),
    responses(
        (status = 200, description = "Generated example queries", body = ExamplesResponse),
        (status = 404, description = "API not found")
    ),
    tag = "Examples"
)]
/// Returns generated example queries for an API.
#[instrument(skip(state), fields(api = %api))]
pub async fn get_examples(
    State(state): State<AppState>,
    Path(api): Path<String>,
    Query(query): Query<ExamplesQuery>,
) -> Result<Json<ExamplesResponse>, ApiError> {
    validate_api_name(&api)?;

    let count = query
        .count
        .unwrap_or_else(|| state.config.example_picks());
    if count == 0 || count > MAX_PICKS {
        return Err(ApiError::BadRequest(format!(
            "count must be between 1 and {MAX_PICKS}"
        )));
    }

    let metadata = state
        .upstream
        .fetch_metadata(&api)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("API {api} not found on upstream host")))?;

    let entity_type = metadata.entity_type().to_string();
    let total_documents = metadata.total_documents();

    // Very large corpora are not scanned; use the curated examples instead
    if suggest::should_use_static_examples(total_documents) {
        info!(total_documents, "Corpus too large to scan, using static examples");
        return Ok(Json(ExamplesResponse {
            api,
            entity_type,
            total_documents,
            from_static: true,
            examples: metadata.static_examples().to_vec(),
        }));
    }

    let hits = state
        .upstream
        .fetch_samples(&api, 0, state.config.sample_page_size())
        .await?;

    let mut rng = query
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let examples = suggest::generate(&hits, &entity_type, count, &mut rng);

    info!(
        sampled = hits.len(),
        generated = examples.len(),
        "Example queries generated"
    );

    Ok(Json(ExamplesResponse {
        api,
        entity_type,
        total_documents,
        from_static: false,
        examples,
    }))
}
