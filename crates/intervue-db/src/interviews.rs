//! Interview repository: the current draft and the completed history,
//! both scoped to one user.

use std::sync::Arc;

use chrono::Utc;
use intervue_common::{InterviewDraft, InterviewSummary};

use crate::database::Database;
use crate::error::Result;

#[derive(Clone)]
pub struct InterviewRepository {
    db: Arc<Database>,
}

impl InterviewRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // ── Current interview ────────────────────────────────────────────────────

    /// Replace the user's current interview.
    pub async fn save_current(&self, user_id: &str, draft: &InterviewDraft) -> Result<()> {
        let payload = serde_json::to_string(draft)?;
        sqlx::query(
            r#"
            INSERT INTO current_interview (user_id, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (user_id) DO UPDATE
                SET payload = excluded.payload,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(payload)
        .bind(Utc::now())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    pub async fn get_current(&self, user_id: &str) -> Result<Option<InterviewDraft>> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM current_interview WHERE user_id = ?1")
                .bind(user_id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(payload.map(|p| serde_json::from_str(&p)).transpose()?)
    }

    pub async fn clear_current(&self, user_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM current_interview WHERE user_id = ?1")
            .bind(user_id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    // ── History ──────────────────────────────────────────────────────────────

    /// Store `summary` in its user's history and clear that user's current
    /// interview, atomically.
    pub async fn complete(&self, summary: &InterviewSummary) -> Result<()> {
        let payload = serde_json::to_string(summary)?;
        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO interview_history
                (id, user_id, job_position, overall_score, interview_ts, payload)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&summary.id)
        .bind(&summary.user_id)
        .bind(&summary.job_position)
        .bind(i64::from(summary.overall_score))
        .bind(summary.interview_date.timestamp_millis())
        .bind(payload)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM current_interview WHERE user_id = ?1")
            .bind(&summary.user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(user_id = %summary.user_id, id = %summary.id, "Interview completed");
        Ok(())
    }

    /// All completed interviews of `user_id`, newest first.
    pub async fn history(&self, user_id: &str) -> Result<Vec<InterviewSummary>> {
        let payloads: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT payload FROM interview_history
            WHERE user_id = ?1
            ORDER BY interview_ts DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        payloads
            .iter()
            .map(|p| serde_json::from_str(p).map_err(Into::into))
            .collect()
    }

    /// `None` when the interview does not exist or belongs to someone else.
    pub async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<InterviewSummary>> {
        let payload: Option<String> = sqlx::query_scalar(
            "SELECT payload FROM interview_history WHERE id = ?1 AND user_id = ?2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(payload.map(|p| serde_json::from_str(&p)).transpose()?)
    }

    /// `true` if an interview was deleted.
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM interview_history WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
