//! Current interview autosave, completion and history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use intervue_common::{InterviewData, InterviewDraft, InterviewSummary};
use intervue_interview::{complete_interview, HistoryQuery};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::{ApiJson, ApiQuery};
use crate::state::SharedState;

// ── Current interview ────────────────────────────────────────────────────────

/// GET /api/interviews/current
pub async fn get_current(
    State(state): State<SharedState>,
    auth: AuthUser,
) -> Result<Json<Option<InterviewDraft>>, ApiError> {
    Ok(Json(state.interviews.get_current(&auth.key()).await?))
}

/// PUT /api/interviews/current
pub async fn save_current(
    State(state): State<SharedState>,
    auth: AuthUser,
    ApiJson(draft): ApiJson<InterviewDraft>,
) -> Result<StatusCode, ApiError> {
    state.interviews.save_current(&auth.key(), &draft).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/interviews/current
pub async fn clear_current(State(state): State<SharedState>, auth: AuthUser) -> Result<StatusCode, ApiError> {
    state.interviews.clear_current(&auth.key()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Completion and history ───────────────────────────────────────────────────

/// POST /api/interviews/complete
pub async fn complete(
    State(state): State<SharedState>,
    auth: AuthUser,
    ApiJson(data): ApiJson<InterviewData>,
) -> Result<(StatusCode, Json<InterviewSummary>), ApiError> {
    let summary = {
        let mut rng = StdRng::from_entropy();
        complete_interview(&data, &auth.key(), &mut rng, Utc::now())?
    };
    state.interviews.complete(&summary).await?;

    tracing::info!(
        user_id = %auth.user_id,
        interview_id = %summary.id,
        overall_score = summary.overall_score,
        "Interview completed"
    );
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/interviews?search=&sort=date|score
pub async fn list(
    State(state): State<SharedState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<Vec<InterviewSummary>>, ApiError> {
    let history = state.interviews.history(&auth.key()).await?;
    Ok(Json(query.apply(history)))
}

/// GET /api/interviews/{id}
pub async fn get_one(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<InterviewSummary>, ApiError> {
    state
        .interviews
        .find_by_id(&auth.key(), &id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Interview not found".to_string()))
}

/// DELETE /api/interviews/{id}
pub async fn delete_one(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.interviews.delete(&auth.key(), &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Interview not found".to_string()))
    }
}
