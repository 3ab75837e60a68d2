//! Interview questions as produced by the generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Question category. Labels coming from the AI are matched
/// case-insensitively; anything unrecognised is `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    RoleSpecific,
    General,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Technical    => "technical",
            QuestionCategory::Behavioral   => "behavioral",
            QuestionCategory::RoleSpecific => "role-specific",
            QuestionCategory::General      => "general",
        }
    }

    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "technical" => QuestionCategory::Technical,
            "behavioral" | "behavioural" => QuestionCategory::Behavioral,
            "role-specific" | "role" => QuestionCategory::RoleSpecific,
            _ => QuestionCategory::General,
        }
    }
}

impl From<String> for QuestionCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl Default for QuestionCategory {
    fn default() -> Self {
        QuestionCategory::General
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub category: QuestionCategory,
}

impl Question {
    pub fn new(question: impl Into<String>, category: QuestionCategory) -> Self {
        Self { question: question.into(), category }
    }
}

/// Response body of question generation. `notice` is set when the
/// questions come from the static bank instead of the AI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl QuestionSet {
    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}
