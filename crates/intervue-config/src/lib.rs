//! Configuration loading for Intervue.
//! Reads intervue.toml from the current directory or the path in the
//! INTERVUE_CONFIG env var, then applies environment overrides.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Development-only signing key, used when nothing else is configured.
pub const DEFAULT_JWT_SECRET: &str = "fallback_secret";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub interview: InterviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url()    -> String { "sqlite://intervue.db".to_string() }
fn default_max_connections() -> u32    { 5 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_database_url(), max_connections: default_max_connections() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
}

fn default_jwt_secret()      -> String { DEFAULT_JWT_SECRET.to_string() }
fn default_token_ttl_hours() -> u64    { 24 * 7 }

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: default_jwt_secret(), token_ttl_hours: default_token_ttl_hours() }
    }
}

impl AuthConfig {
    pub fn secret(&self) -> SecretString {
        SecretString::from(self.jwt_secret.clone())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Which chat API `llm.base_url` points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenRouter or any OpenAI-compatible endpoint; needs an API key.
    #[default]
    OpenRouter,
    /// A local Ollama server; no key.
    Ollama,
}

impl std::str::FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(Self::OpenRouter),
            "ollama" => Ok(Self::Ollama),
            other => Err(ConfigError::Invalid(format!(
                "llm.provider must be \"openrouter\" or \"ollama\", got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: LlmProvider,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Without a key every request is answered from the static bank.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_app_url")]
    pub app_url: String,
    #[serde(default = "default_app_title")]
    pub app_title: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_base_url() -> String { "https://openrouter.ai/api".to_string() }
fn default_llm_model()    -> String { "openai/gpt-3.5-turbo".to_string() }
fn default_app_url()      -> String { "http://localhost:3000".to_string() }
fn default_app_title()    -> String { "AI Interview Assistant".to_string() }
fn default_timeout_secs() -> u64    { 30 }

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            api_key: None,
            app_url: default_app_url(),
            app_title: default_app_title(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| SecretString::from(k.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    #[serde(default = "default_question_count")]
    pub default_question_count: u32,
    #[serde(default = "default_max_question_count")]
    pub max_question_count: u32,
}

fn default_question_count()     -> u32 { 5 }
fn default_max_question_count() -> u32 { 20 }

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            default_question_count: default_question_count(),
            max_question_count: default_max_question_count(),
        }
    }
}

impl Config {
    /// Load configuration for the running process.
    ///
    /// `.env` is read first, a missing config file falls back to defaults,
    /// and environment variables win over both.
    pub fn load() -> Result<Self> {
        report_dotenv(dotenvy::dotenv());

        let path = std::env::var("INTERVUE_CONFIG")
            .unwrap_or_else(|_| "intervue.toml".to_string());

        let mut config = Self::load_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        if config.auth.uses_default_secret() {
            tracing::warn!("JWT_SECRET not set, signing tokens with the development fallback secret");
        }
        if config.llm.provider == LlmProvider::OpenRouter && config.llm.api_key().is_none() {
            tracing::warn!("No LLM API key configured (set llm.api_key or OPENROUTER_API_KEY), default questions only");
        }

        Ok(config)
    }

    /// Read a TOML file, or defaults when the file does not exist.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides through `lookup` so tests need not touch
    /// the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("PORT must be a port number, got {port:?}"))
            })?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(key) = lookup("OPENROUTER_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(app_url) = lookup("APP_URL") {
            self.llm.app_url = app_url;
        }
        if let Some(provider) = lookup("LLM_PROVIDER") {
            self.llm.provider = provider.parse()?;
        }
        if let Some(base_url) = lookup("LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("LLM_MODEL") {
            self.llm.model = model;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid("database.max_connections must be at least 1".into()));
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("auth.jwt_secret must not be empty".into()));
        }
        if self.auth.token_ttl_hours == 0 {
            return Err(ConfigError::Invalid("auth.token_ttl_hours must be at least 1".into()));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid("llm.timeout_secs must be at least 1".into()));
        }
        let interview = &self.interview;
        if interview.default_question_count == 0
            || interview.default_question_count > interview.max_question_count
        {
            return Err(ConfigError::Invalid(format!(
                "interview.default_question_count must be within 1..={}",
                interview.max_question_count
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Log the outcome of reading `.env`. A missing file is normal; anything
/// else is warned about. Returns whether a warning was emitted.
pub(crate) fn report_dotenv<T: std::fmt::Debug>(result: std::result::Result<T, dotenvy::Error>) -> bool {
    match result {
        Ok(path) => {
            tracing::debug!(?path, "Loaded .env");
            false
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load .env, continuing without it");
            true
        }
    }
}

mod tests;
