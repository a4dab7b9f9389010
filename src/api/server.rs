//! Axum server setup and routing.

use axum::{
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{docs::ApiDoc, handlers, middleware as api_middleware};
use crate::app_state::AppState;

/// Run the Axum API server.
///
/// Serves the static demo page from `public/`, the Swagger UI, and the
/// JSON endpoints the page consumes.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(
    state: AppState,
    port: u16,
    rate_limit_rpm: u32,
    cors_origins: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let limiter = api_middleware::rate_limit::create_rate_limiter(rate_limit_rpm);

    let api_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/apis/:api/metadata", get(handlers::metadata::get_metadata))
        .route("/apis/:api/examples", get(handlers::examples::get_examples))
        .route("/apis/:api/try", get(handlers::tryit::try_query));

    let cors = build_cors_layer(cors_origins);

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(api_middleware::logging::log_requests))
        .layer(middleware::from_fn(move |req, next| {
            api_middleware::rate_limit::rate_limit(limiter.clone(), req, next)
        }));

    let static_files = ServeDir::new("public")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("public/index.html"));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .fallback_service(static_files)
        .layer(middleware_stack)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(addr = %addr, "Starting sandbox server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(origins: Vec<String>) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let mut layer = CorsLayer::new();
        for origin in origins {
            match origin.parse::<HeaderValue>() {
                Ok(header) => layer = layer.allow_origin(header),
                Err(_) => warn!(origin = %origin, "Ignoring malformed CORS origin"),
            }
        }
        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_layer_wildcard() {
        let _ = build_cors_layer(vec!["*".to_string()]);
        let _ = build_cors_layer(Vec::new());
    }

    #[test]
    fn test_build_cors_layer_skips_malformed_origin() {
        // A non-parseable origin is dropped with a warning; the rest of the
        // list still applies
        let _ = build_cors_layer(vec![
            "https://demo.example.org".to_string(),
            "bad\norigin".to_string(),
        ]);
    }
}
