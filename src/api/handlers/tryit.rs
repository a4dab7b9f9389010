//! Query execution endpoint.
//!
//! Proxies a user-selected query path to the upstream API. Error bodies are
//! returned the same way as success bodies; the `ok` flag exists only so the
//! page can style the result viewer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::time::Instant;
use tracing::{info, instrument};

use crate::api::handlers::validate_api_name;
use crate::api::middleware::error::ApiError;
use crate::api::models::{TryQuery, TryResponse};
use crate::app_state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/apis/{api}/try",
    params(
        ("api" = String, Path, description = "API identifier (e.g., mygene)"),
        TryQuery
    ),
    responses(
        (status = 200, description = "Upstream response with ok flag", body = TryResponse),
        (status = 400, description = "Invalid query path")
    ),
    tag = "Try"
)]
/// Executes a query path against the API and returns the response verbatim.
#[instrument(skip(state), fields(api = %api))]
pub async fn try_query(
    State(state): State<AppState>,
    Path(api): Path<String>,
    Query(query): Query<TryQuery>,
) -> Result<Json<TryResponse>, ApiError> {
    validate_api_name(&api)?;

    if !query.path.starts_with('/') {
        return Err(ApiError::BadRequest(
            "path must start with '/' (e.g. /query?q=symbol:BRCA1)".to_string(),
        ));
    }

    let start = Instant::now();
    let outcome = state.upstream.run_query(&api, &query.path).await?;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    info!(
        path = %query.path,
        ok = outcome.ok,
        status = outcome.status,
        elapsed_ms,
        "Query executed"
    );

    Ok(Json(TryResponse {
        api,
        path: query.path,
        ok: outcome.ok,
        status: outcome.status,
        elapsed_ms,
        body: outcome.body,
    }))
}
