//! Chaos configuration admin handlers

use axum::{Json, extract::State};
use domain::ChaosConfig;
use tracing::instrument;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Read the chaos configuration currently in effect
#[utoipa::path(
    get,
    path = "/api/v1/admin/chaos",
    tag = "chaos",
    responses(
        (status = 200, description = "Current chaos configuration", body = ChaosConfig)
    )
)]
pub async fn get_chaos_config(State(state): State<AppState>) -> Json<ChaosConfig> {
    Json(ChaosConfig::clone(&state.chaos_config.current()))
}

/// Replace the chaos configuration
///
/// Missing fields take their defaults. The new settings apply to every
/// request evaluated after this call returns.
#[utoipa::path(
    put,
    path = "/api/v1/admin/chaos",
    tag = "chaos",
    request_body = ChaosConfig,
    responses(
        (status = 200, description = "Configuration stored", body = ChaosConfig),
        (status = 400, description = "Malformed payload or constraint violations", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, config))]
pub async fn update_chaos_config(
    State(state): State<AppState>,
    ValidatedJson(config): ValidatedJson<ChaosConfig>,
) -> Result<Json<ChaosConfig>, ApiError> {
    let stored = state.chaos_config.update(config)?;
    Ok(Json(ChaosConfig::clone(&stored)))
}
