//! intervue-common — Shared types and errors used across all Intervue crates.

pub mod error;
pub mod user;
pub mod question;
pub mod interview;

// Re-export commonly used types
pub use error::{IntervueError, Result};
pub use user::{User, UserInfo};
pub use question::{Question, QuestionCategory, QuestionSet};
pub use interview::{InterviewData, InterviewDraft, InterviewQuestion, InterviewSummary, QuestionScore};
