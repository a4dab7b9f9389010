//! OpenAPI documentation for the REST API.

use utoipa::OpenApi;

use crate::api::handlers;

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::metadata::get_metadata,
        handlers::examples::get_examples,
        handlers::tryit::try_query,
    ),
    components(schemas(
        crate::api::models::HealthResponse,
        crate::api::models::HealthStatus,
        crate::api::models::MetadataSummary,
        crate::api::models::SourceSummary,
        crate::api::models::ExamplesResponse,
        crate::api::models::TryResponse,
        crate::api::models::ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Metadata", description = "Upstream API metadata"),
        (name = "Examples", description = "Example-query generation"),
        (name = "Try", description = "Query execution"),
    ),
    info(
        title = "API Sandbox",
        version = "0.1.0",
        description = "Interactive sandbox for trying out pending JSON APIs",
    )
)]
pub struct ApiDoc;
