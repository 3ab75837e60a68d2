//! intervue-llm — Chat-completion backend abstraction.
//! One trait, OpenAI-compatible implementations, and an audit record per call.

pub mod backend;
pub mod audit;

pub use backend::{LlmBackend, LlmError, LlmRequest, LlmResponse, Message, OllamaBackend, OpenAiCompatibleBackend};
pub use audit::LlmAuditEntry;
