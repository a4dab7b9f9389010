//! Shared application state for the sandbox API server.

use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::upstream::UpstreamClient;

/// Shared application state for API handlers.
///
/// Everything here is immutable after startup; handlers hold no other
/// shared state, so overlapping requests never coordinate.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration.
    pub config: Arc<Config>,
    /// HTTP client bound to the upstream API host.
    pub upstream: Arc<UpstreamClient>,
    /// Application start time for uptime tracking.
    pub start_time: SystemTime,
}

impl AppState {
    /// Create a new `AppState` instance.
    #[must_use]
    pub fn new(config: Config, upstream: UpstreamClient) -> Self {
        Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
            start_time: SystemTime::now(),
        }
    }
}
