//! Extraction of questions from free-form model output.
//!
//! Models are asked for `{"questions": [...]}` but regularly answer with a
//! bare array, a differently named field, or JSON wrapped in prose or a
//! code fence. All of those are accepted.

use std::sync::OnceLock;

use intervue_common::{IntervueError, Question, QuestionCategory, Result};
use regex::Regex;
use serde_json::Value;

fn array_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("static regex"))
}

/// Parse the model's message content into questions.
pub fn parse_questions(content: &str) -> Result<Vec<Question>> {
    let value = match serde_json::from_str::<Value>(content.trim()) {
        Ok(value) => value,
        Err(_) => {
            let span = array_span()
                .find(content)
                .ok_or_else(|| parse_failure("no JSON array in response"))?;
            serde_json::from_str::<Value>(span.as_str())
                .map_err(|_| parse_failure("embedded array is not valid JSON"))?
        }
    };

    let items = question_list(&value).ok_or_else(|| parse_failure("no question list in response"))?;
    let questions: Vec<Question> = items.iter().filter_map(to_question).collect();

    if questions.is_empty() {
        return Err(parse_failure("question list is empty"));
    }
    Ok(questions)
}

fn parse_failure(detail: &str) -> IntervueError {
    IntervueError::Generation(format!("Failed to parse questions from AI response: {detail}"))
}

/// `questions` field, else the first array-valued field in document order,
/// else the value itself if it is an array.
fn question_list(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map
            .get("questions")
            .and_then(Value::as_array)
            .or_else(|| map.values().find_map(Value::as_array)),
        _ => None,
    }
}

fn to_question(item: &Value) -> Option<Question> {
    match item {
        Value::String(text) => non_blank(text).map(|t| Question::new(t, QuestionCategory::General)),
        Value::Object(map) => {
            let text = map
                .get("question")
                .or_else(|| map.get("text"))
                .and_then(Value::as_str)
                .and_then(non_blank)?;
            let category = map
                .get("category")
                .and_then(Value::as_str)
                .map(QuestionCategory::from_label)
                .unwrap_or_default();
            Some(Question::new(text, category))
        }
        _ => None,
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
