use axum::extract::State;
use axum::Json;
use intervue_interview::DashboardStats;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<SharedState>, auth: AuthUser) -> Result<Json<DashboardStats>, ApiError> {
    let history = state.interviews.history(&auth.key()).await?;
    Ok(Json(DashboardStats::from_history(&history)))
}
