//! Liveness and health.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

pub const ROOT_MESSAGE: &str = "AI Interview Assistant API is running";

/// GET /
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub ai_configured: bool,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let database = state.db.ping().await;
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        ai_configured: state.generator.has_backend(),
    })
}
