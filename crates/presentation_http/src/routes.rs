//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, middleware::MessageIdLayer, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.server.max_body_bytes;

    Router::new()
        // Health
        .route("/api/v1/health", get(handlers::health::health_check))
        // HL7 intake
        .route(
            "/api/v1/hl7/messages",
            post(handlers::messages::receive_message),
        )
        // Chaos admin
        .route(
            "/api/v1/admin/chaos",
            get(handlers::chaos::get_chaos_config).put(handlers::chaos::update_chaos_config),
        )
        // OpenAPI document
        .merge(openapi::create_openapi_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(MessageIdLayer::new())
        .with_state(state)
}
