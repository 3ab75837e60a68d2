//! Turning a finished interview into an [`InterviewSummary`].
//!
//! Per-question scores are placeholders drawn from 70..=99 until answers
//! are graded for real; everything derived from them is exact.

use chrono::{DateTime, Utc};
use intervue_common::{InterviewData, InterviewSummary, IntervueError, QuestionScore, Result};
use rand::Rng;
use uuid::Uuid;

pub const MIN_PLACEHOLDER_SCORE: u32 = 70;
pub const MAX_PLACEHOLDER_SCORE: u32 = 99;

const STRENGTHS: [&str; 3] = [
    "Good communication skills",
    "Clear and structured answers",
    "Demonstrated relevant experience",
];

const IMPROVEMENTS: [&str; 3] = [
    "Provide more specific examples",
    "Focus on quantifiable achievements",
    "Elaborate more on problem-solving approach",
];

/// Score `data` for `user_id` at time `now`.
pub fn complete_interview<R: Rng + ?Sized>(
    data: &InterviewData,
    user_id: &str,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<InterviewSummary> {
    if data.job_position.trim().is_empty() {
        return Err(IntervueError::Validation("Job position is required".to_string()));
    }
    if data.questions.is_empty() {
        return Err(IntervueError::Validation("Interview has no questions".to_string()));
    }

    let question_scores: Vec<QuestionScore> = data
        .questions
        .iter()
        .map(|q| QuestionScore {
            question: q.question.clone(),
            score: rng.gen_range(MIN_PLACEHOLDER_SCORE..=MAX_PLACEHOLDER_SCORE),
        })
        .collect();

    let total: u32 = question_scores.iter().map(|s| s.score).sum();
    let overall_score = total / question_scores.len() as u32;

    let answered_questions = data
        .answers
        .iter()
        .take(data.questions.len())
        .filter(|a| !a.is_empty())
        .count() as u32;

    Ok(InterviewSummary {
        id: Uuid::new_v4().to_string(),
        job_position: data.job_position.trim().to_string(),
        experience_level: data.experience_level.clone(),
        total_questions: data.questions.len() as u32,
        answered_questions,
        interview_date: now,
        duration: data
            .duration
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format_duration(0)),
        overall_score,
        strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
        improvements: IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        question_scores,
        user_id: user_id.to_string(),
    })
}

/// `m:ss`, minutes unbounded.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
