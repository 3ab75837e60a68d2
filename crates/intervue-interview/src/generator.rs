//! Question generation: AI first, static bank when the AI cannot help.

use std::sync::Arc;
use std::time::Instant;

use intervue_common::{IntervueError, Question, QuestionSet, Result};
use intervue_llm::{LlmAuditEntry, LlmBackend, LlmRequest};
use serde::{Deserialize, Serialize};

use crate::bank::default_questions;
use crate::categories::find_closest_category;
use crate::parse::parse_questions;
use crate::prompt::build_prompt;

pub const FALLBACK_NOTICE: &str = "Using default questions due to AI service unavailability";

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    #[serde(default)]
    pub job_position: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl QuestionRequest {
    pub fn new(job_position: impl Into<String>) -> Self {
        Self { job_position: Some(job_position.into()), ..Default::default() }
    }

    pub fn with_experience(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Clone)]
pub struct QuestionGenerator {
    backend: Option<Arc<dyn LlmBackend>>,
    default_count: usize,
    max_count: usize,
}

impl QuestionGenerator {
    /// `None` means no AI is configured and every request is served from
    /// the static bank.
    pub fn new(backend: Option<Arc<dyn LlmBackend>>) -> Self {
        Self {
            backend,
            default_count: DEFAULT_QUESTION_COUNT,
            max_count: MAX_QUESTION_COUNT,
        }
    }

    pub fn with_limits(mut self, default_count: usize, max_count: usize) -> Self {
        self.max_count = max_count.max(1);
        self.default_count = default_count.clamp(1, self.max_count);
        self
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn resolve_count(&self, requested: Option<u32>) -> usize {
        requested
            .map(|c| c as usize)
            .unwrap_or(self.default_count)
            .clamp(1, self.max_count)
    }

    /// Generate questions for `req`. Only a missing job position is an
    /// error; AI failures degrade to the static bank with a notice.
    pub async fn generate(&self, req: &QuestionRequest, user_id: Option<&str>) -> Result<QuestionSet> {
        let job_position = req
            .job_position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| IntervueError::Validation("Job position is required".to_string()))?;
        let count = self.resolve_count(req.count);

        let Some(backend) = &self.backend else {
            tracing::debug!(job_position, "No AI backend configured, serving default questions");
            return Ok(Self::fallback(job_position, count));
        };

        match self
            .generate_with_ai(backend.as_ref(), job_position, req.experience_level.as_deref(), count, user_id)
            .await
        {
            Ok(questions) => Ok(QuestionSet { questions, notice: None }),
            Err(e) => {
                tracing::warn!(job_position, error = %e, "AI question generation failed, using defaults");
                Ok(Self::fallback(job_position, count))
            }
        }
    }

    async fn generate_with_ai(
        &self,
        backend: &dyn LlmBackend,
        job_position: &str,
        experience_level: Option<&str>,
        count: usize,
        user_id: Option<&str>,
    ) -> Result<Vec<Question>> {
        let request = LlmRequest {
            messages: build_prompt(job_position, experience_level, count),
            json_mode: true,
            ..Default::default()
        };

        let started = Instant::now();
        let response = backend
            .complete(request)
            .await
            .map_err(|e| IntervueError::Generation(e.to_string()))?;

        LlmAuditEntry::new(
            user_id.map(str::to_string),
            "interview_questions",
            backend,
            &response,
            started.elapsed().as_millis() as u64,
        )
        .record();

        let mut questions = parse_questions(&response.content)?;
        questions.truncate(count);
        Ok(questions)
    }

    /// Static questions for the category closest to `job_position`.
    pub fn fallback(job_position: &str, count: usize) -> QuestionSet {
        let category = find_closest_category(job_position);
        tracing::debug!(job_position, category = %category, "Selected fallback question bank");
        QuestionSet {
            questions: default_questions(category, count),
            notice: Some(FALLBACK_NOTICE.to_string()),
        }
    }
}
