//! Filtering and ordering of completed interviews.

use intervue_common::InterviewSummary;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first.
    #[default]
    Date,
    /// Highest overall score first; ties keep date order.
    Score,
}

/// `?search=&sort=` on the history listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortBy,
}

impl HistoryQuery {
    pub fn apply(&self, history: Vec<InterviewSummary>) -> Vec<InterviewSummary> {
        let needle = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut entries: Vec<InterviewSummary> = match needle {
            Some(needle) => history
                .into_iter()
                .filter(|e| e.job_position.to_lowercase().contains(&needle))
                .collect(),
            None => history,
        };

        entries.sort_by(|a, b| b.interview_date.cmp(&a.interview_date));
        if self.sort == SortBy::Score {
            entries.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
        }
        entries
    }
}
