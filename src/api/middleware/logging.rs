//! Request logging middleware using tracing.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Upstream round trips beyond this are worth flagging.
const SLOW_REQUEST_MS: u128 = 5_000;

/// Logs incoming requests and response metadata.
///
/// Static asset requests (everything outside `/api`) are logged at debug
/// level to keep page loads from drowning out the interesting traffic.
/// Requests slower than [`SLOW_REQUEST_MS`] are flagged, since sandbox
/// latency is dominated by the upstream round trip.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let is_api = uri.path().starts_with("/api");
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    let status = response.status();

    if !is_api {
        debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            "Static request completed"
        );
        return response;
    }

    if duration.as_millis() > SLOW_REQUEST_MS {
        warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "Slow request, upstream round trip likely degraded"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "Request completed"
        );
    }

    response
}
