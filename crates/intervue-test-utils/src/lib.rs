//! intervue-test-utils — Scripted LLM backend and fixtures for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use intervue_common::{
    InterviewData, InterviewQuestion, InterviewSummary, Question, QuestionCategory, QuestionScore,
};
use intervue_llm::{LlmBackend, LlmError, LlmRequest, LlmResponse};

// ── ScriptedBackend ──────────────────────────────────────────────────────────

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<String, String>>,
    requests: Vec<LlmRequest>,
}

/// An [`LlmBackend`] that answers from a queue of canned replies.
///
/// Clones share the queue and the request log, so a test can hand one
/// clone to the code under test and inspect the other afterwards. Once the
/// queue is empty every call fails with [`LlmError::Unavailable`].
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion with `content`.
    pub fn reply(self, content: &str) -> Self {
        self.push(Ok(content.to_string()));
        self
    }

    /// Queue a failed completion.
    pub fn fail(self, reason: &str) -> Self {
        self.push(Err(reason.to_string()));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.lock().requests.clone()
    }

    fn push(&self, entry: Result<String, String>) {
        self.lock().replies.push_back(entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test poisons the lock; the script itself is still usable.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut script = self.lock();
        let model = req.model.clone().unwrap_or_else(|| "scripted".to_string());
        script.requests.push(req);
        match script.replies.pop_front() {
            Some(Ok(content)) => Ok(LlmResponse {
                completion_tokens: content.split_whitespace().count() as u32,
                content,
                model,
                prompt_tokens: 0,
            }),
            Some(Err(reason)) => Err(LlmError::Unavailable(reason)),
            None => Err(LlmError::Unavailable("script exhausted".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        "scripted"
    }

    fn is_local(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("How do you approach testing your code?", QuestionCategory::Technical),
        Question::new("Tell me about a time you disagreed with a teammate.", QuestionCategory::Behavioral),
        Question::new("Why do you want this role?", QuestionCategory::RoleSpecific),
    ]
}

/// A JSON reply in the shape models are asked to produce.
pub fn sample_questions_reply() -> String {
    serde_json::json!({ "questions": sample_questions() }).to_string()
}

/// Three questions, two answered.
pub fn sample_interview_data() -> InterviewData {
    InterviewData {
        job_position: "Software Engineer".to_string(),
        experience_level: "Mid Level".to_string(),
        questions: sample_questions().into_iter().map(InterviewQuestion::from).collect(),
        answers: vec![
            "Unit tests first, then integration tests around the seams.".to_string(),
            String::new(),
            "The team ships tools I already use.".to_string(),
        ],
        duration: Some("6:42".to_string()),
    }
}

pub fn fixed_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 10, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// A stored summary for `user_id` with a fixed score and date.
pub fn sample_summary(user_id: &str, job_position: &str, overall_score: u32, day: u32) -> InterviewSummary {
    InterviewSummary {
        id: uuid::Uuid::new_v4().to_string(),
        job_position: job_position.to_string(),
        experience_level: "Mid Level".to_string(),
        total_questions: 3,
        answered_questions: 2,
        interview_date: fixed_date(day),
        duration: "6:42".to_string(),
        overall_score,
        strengths: vec!["Good communication skills".to_string()],
        improvements: vec!["Provide more specific examples".to_string()],
        question_scores: sample_questions()
            .into_iter()
            .map(|q| QuestionScore { question: q.question, score: overall_score })
            .collect(),
        user_id: user_id.to_string(),
    }
}
