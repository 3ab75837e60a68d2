//! AI interview question generation.

use axum::extract::State;
use axum::Json;
use intervue_common::QuestionSet;
use intervue_interview::QuestionRequest;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::ApiJson;
use crate::state::SharedState;

/// POST /api/ai/questions
pub async fn generate_questions(
    State(state): State<SharedState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<QuestionRequest>,
) -> Result<Json<QuestionSet>, ApiError> {
    let set = state.generator.generate(&req, Some(&auth.key())).await?;
    tracing::info!(
        user_id = %auth.user_id,
        questions = set.questions.len(),
        fallback = set.is_fallback(),
        "Generated interview questions"
    );
    Ok(Json(set))
}
