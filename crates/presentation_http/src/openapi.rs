//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document for the HL7 Mirror HTTP API.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for HL7 Mirror
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HL7 Mirror API",
        description = "HL7v2 receiving endpoint test double with configurable fault injection",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "hl7", description = "HL7v2 message intake"),
        (name = "chaos", description = "Fault injection settings"),
        (name = "health", description = "Health check")
    ),
    paths(
        handlers::messages::receive_message,
        handlers::chaos::get_chaos_config,
        handlers::chaos::update_chaos_config,
        handlers::health::health_check,
    ),
    components(
        schemas(
            domain::ChaosConfig,
            domain::LatencyConfig,
            handlers::health::HealthResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document
///
/// - `/api-docs/openapi.json` - OpenAPI specification
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
