use anyhow::{Context, Result};

use crate::interview::selector::{SelectionStrategy, DEFAULT_QUESTION_COUNT};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub questions_file: String,
    pub default_question_count: usize,
    pub max_questions: usize,
    pub question_time_limit_secs: u64,
    pub selection_strategy: SelectionStrategy,
    pub max_upload_bytes: usize,
    pub transcription_url: Option<String>,
    pub transcription_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            questions_file: "data/questions/interview_questions.json".to_string(),
            default_question_count: DEFAULT_QUESTION_COUNT,
            max_questions: 10,
            question_time_limit_secs: 180,
            selection_strategy: SelectionStrategy::CatalogOrder,
            max_upload_bytes: 16 * 1024 * 1024,
            transcription_url: None,
            transcription_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(defaults.questions_file),
            default_question_count: parse_env(
                "DEFAULT_QUESTION_COUNT",
                defaults.default_question_count,
            )?,
            max_questions: parse_env("MAX_QUESTIONS", defaults.max_questions)?,
            question_time_limit_secs: parse_env(
                "QUESTION_TIME_LIMIT_SECS",
                defaults.question_time_limit_secs,
            )?,
            selection_strategy: match optional_env("SELECTION_STRATEGY") {
                Some(raw) => raw
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context("SELECTION_STRATEGY must be catalog_order or resume_weighted")?,
                None => defaults.selection_strategy,
            },
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            transcription_url: optional_env("TRANSCRIPTION_URL"),
            transcription_api_key: optional_env("TRANSCRIPTION_API_KEY"),
        })
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
