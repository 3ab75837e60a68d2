//! Prompt construction for question generation.

use intervue_llm::Message;

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "mid-level";

const SYSTEM_PROMPT: &str = "You are a professional job interviewer. Your task is to generate \
relevant and insightful interview questions for specific job roles.";

/// System and user messages asking for `count` questions as JSON.
pub fn build_prompt(job_position: &str, experience_level: Option<&str>, count: usize) -> Vec<Message> {
    let experience = experience_level
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EXPERIENCE_LEVEL);

    let user = format!(
        "Generate {count} professional interview questions for a {experience} {job_position} position.\n\
         The questions must be challenging but fair, and must assess both technical skills and soft skills relevant to this role.\n\
         Format the output as a JSON object with a \"questions\" array of question objects with \"question\" and \"category\" fields. \
         Categories can be \"technical\", \"behavioral\", or \"role-specific\"."
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
}
