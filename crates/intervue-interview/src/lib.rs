//! intervue-interview — Interview domain logic.
//!
//! Question generation (AI first, static bank as fallback), completion
//! scoring, history filtering and dashboard statistics.

pub mod categories;
pub mod bank;
pub mod prompt;
pub mod parse;
pub mod generator;
pub mod scoring;
pub mod history;
pub mod stats;

pub use categories::{find_closest_category, JobCategory};
pub use generator::{QuestionGenerator, QuestionRequest, FALLBACK_NOTICE};
pub use history::{HistoryQuery, SortBy};
pub use scoring::{complete_interview, format_duration};
pub use stats::DashboardStats;
