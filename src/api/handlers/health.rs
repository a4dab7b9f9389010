//! Health check endpoint.

use axum::{extract::State, Json};
use std::time::SystemTime;
use tracing::instrument;

use crate::api::middleware::error::ApiError;
use crate::api::models::{HealthResponse, HealthStatus};
use crate::app_state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service health information", body = HealthResponse)
    ),
    tag = "Health"
)]
/// Returns service health information.
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let uptime = SystemTime::now()
        .duration_since(state.start_time)
        .unwrap_or_default()
        .as_secs();

    // Unreachable upstream degrades the sandbox but the static page and
    // Swagger UI still serve, so this is never a failed health check
    let upstream_reachable = state.upstream.ping().await.is_ok();

    let status = if upstream_reachable {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Ok(Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        upstream_url: state.upstream.base().to_string(),
        upstream_status: if upstream_reachable { "reachable" } else { "unreachable" }.to_string(),
        timestamp: chrono::Utc::now(),
    }))
}
