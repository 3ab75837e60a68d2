//! Dashboard aggregates over a user's interview history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use intervue_common::InterviewSummary;
use serde::Serialize;

/// Number of most recent interviews plotted on the dashboard.
pub const TREND_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrendPoint {
    pub interview_date: DateTime<Utc>,
    pub overall_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionStats {
    pub job_position: String,
    pub interviews: u32,
    pub average_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_interviews: u32,
    pub average_score: u32,
    pub best_score: u32,
    pub latest_score: Option<u32>,
    /// Answered over asked questions across all interviews, 0.0 to 1.0.
    pub answered_ratio: f64,
    pub score_trend: Vec<ScoreTrendPoint>,
    pub positions: Vec<PositionStats>,
}

impl DashboardStats {
    pub fn from_history(history: &[InterviewSummary]) -> Self {
        let mut chronological: Vec<&InterviewSummary> = history.iter().collect();
        chronological.sort_by_key(|e| e.interview_date);

        let total_interviews = history.len() as u32;
        let score_sum: u32 = history.iter().map(|e| e.overall_score).sum();
        let average_score = if history.is_empty() { 0 } else { score_sum / total_interviews };

        let asked: u32 = history.iter().map(|e| e.total_questions).sum();
        let answered: u32 = history
            .iter()
            .map(|e| e.answered_questions.min(e.total_questions))
            .sum();
        let answered_ratio = if asked == 0 { 0.0 } else { f64::from(answered) / f64::from(asked) };

        let score_trend = chronological
            .iter()
            .skip(chronological.len().saturating_sub(TREND_LENGTH))
            .map(|e| ScoreTrendPoint {
                interview_date: e.interview_date,
                overall_score: e.overall_score,
            })
            .collect();

        Self {
            total_interviews,
            average_score,
            best_score: history.iter().map(|e| e.overall_score).max().unwrap_or(0),
            latest_score: chronological.last().map(|e| e.overall_score),
            answered_ratio,
            score_trend,
            positions: position_stats(history),
        }
    }
}

/// Grouped by exact job position, most practised first, then by name.
fn position_stats(history: &[InterviewSummary]) -> Vec<PositionStats> {
    let mut groups: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for entry in history {
        let slot = groups.entry(entry.job_position.as_str()).or_default();
        slot.0 += 1;
        slot.1 += entry.overall_score;
    }

    let mut positions: Vec<PositionStats> = groups
        .into_iter()
        .map(|(job_position, (interviews, total))| PositionStats {
            job_position: job_position.to_string(),
            interviews,
            average_score: total / interviews,
        })
        .collect();
    // BTreeMap order already sorts by name; the stable sort keeps it for ties.
    positions.sort_by(|a, b| b.interviews.cmp(&a.interviews));
    positions
}
