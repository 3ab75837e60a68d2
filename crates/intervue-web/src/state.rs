//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use intervue_config::{Config, LlmConfig, LlmProvider};
use intervue_db::{Database, InterviewRepository, UserRepository};
use intervue_interview::QuestionGenerator;
use intervue_llm::{LlmBackend, LlmError, OllamaBackend, OpenAiCompatibleBackend};
use intervue_security::TokenService;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub db: Arc<Database>,
    pub users: UserRepository,
    pub interviews: InterviewRepository,
    pub tokens: TokenService,
    pub generator: QuestionGenerator,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenService, generator: QuestionGenerator) -> Self {
        let db = Arc::new(db);
        Self {
            users: UserRepository::new(db.clone()),
            interviews: InterviewRepository::new(db.clone()),
            db,
            tokens,
            generator,
        }
    }

    /// Wire everything from `config` around an open database.
    pub fn from_config(config: &Config, db: Database) -> Result<Self, LlmError> {
        let tokens = TokenService::new(
            &config.auth.secret(),
            chrono::Duration::hours(config.auth.token_ttl_hours as i64),
        );
        let generator = QuestionGenerator::new(build_backend(&config.llm)?).with_limits(
            config.interview.default_question_count as usize,
            config.interview.max_question_count as usize,
        );
        Ok(Self::new(db, tokens, generator))
    }
}

pub type SharedState = Arc<AppState>;

/// The backend `llm.provider` selects. OpenRouter without an API key
/// yields `None`, so every request is served from the static bank.
pub fn build_backend(llm: &LlmConfig) -> Result<Option<Arc<dyn LlmBackend>>, LlmError> {
    let timeout = Duration::from_secs(llm.timeout_secs);
    let backend: Arc<dyn LlmBackend> = match llm.provider {
        LlmProvider::OpenRouter => {
            let Some(api_key) = llm.api_key() else {
                return Ok(None);
            };
            Arc::new(
                OpenAiCompatibleBackend::new(&llm.base_url, &llm.model, Some(api_key))
                    .with_header("HTTP-Referer", &llm.app_url)
                    .with_header("X-Title", &llm.app_title)
                    .with_timeout(timeout)?,
            )
        }
        LlmProvider::Ollama => {
            Arc::new(OllamaBackend::new(&llm.base_url, &llm.model).with_timeout(timeout)?)
        }
    };
    tracing::info!(
        backend = backend.name(),
        model = %llm.model,
        base_url = %llm.base_url,
        "AI question generation enabled"
    );
    Ok(Some(backend))
}
