//! Interview sessions: the in-progress draft, the data submitted on
//! completion, and the stored summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::{Question, QuestionCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(default)]
    pub category: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl From<Question> for InterviewQuestion {
    fn from(q: Question) -> Self {
        Self { question: q.question, category: q.category, answer: None, score: None }
    }
}

/// Everything needed to close an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewData {
    pub job_position: String,
    #[serde(default)]
    pub experience_level: String,
    pub questions: Vec<InterviewQuestion>,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// The current interview slot. Clients save whatever they have so far,
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<InterviewQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub id: String,
    pub job_position: String,
    pub experience_level: String,
    pub total_questions: u32,
    pub answered_questions: u32,
    pub interview_date: DateTime<Utc>,
    pub duration: String,
    pub overall_score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub question_scores: Vec<QuestionScore>,
    pub user_id: String,
}
