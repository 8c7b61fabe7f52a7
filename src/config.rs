use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

/// Where quiz history is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStore {
    Memory,
    Mongo,
}

impl HistoryStore {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => HistoryStore::Mongo,
            _ => HistoryStore::Memory,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub model_timeout_secs: u64,
    pub history_store: HistoryStore,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub quiz_history_collection: String,
    pub max_payload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            history_store: env::var("HISTORY_STORE")
                .map(|s| HistoryStore::parse(&s))
                .unwrap_or(HistoryStore::Memory),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "notes-quiz".to_string()),
            quiz_history_collection: env::var("QUIZ_HISTORY_COLLECTION")
                .unwrap_or_else(|_| "quiz_history".to_string()),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(16 * 1024 * 1024),
        }
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.model_timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "MODEL_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.max_payload_bytes == 0 {
            return Err(AppError::ValidationError(
                "MAX_PAYLOAD_BYTES must be greater than zero".to_string(),
            ));
        }

        if self.openai_api_key.is_none() {
            log::warn!(
                "OPENAI_API_KEY is not set; quizzes and evaluations will use the rule-based fallback"
            );
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5001,
            openai_api_key: None,
            openai_api_base: None,
            openai_model: "gpt-4o-mini".to_string(),
            model_timeout_secs: 5,
            history_store: HistoryStore::Memory,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "notes-quiz-test".to_string(),
            quiz_history_collection: "quiz_history".to_string(),
            max_payload_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(!config.openai_model.is_empty());
        assert!(!config.quiz_history_collection.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.history_store, HistoryStore::Memory);
        assert_eq!(config.model_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            model_timeout_secs: 0,
            ..Config::test_config()
        };

        assert!(matches!(
            config.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_history_store_parsing() {
        assert_eq!(HistoryStore::parse("mongo"), HistoryStore::Mongo);
        assert_eq!(HistoryStore::parse(" MongoDB "), HistoryStore::Mongo);
        assert_eq!(HistoryStore::parse("memory"), HistoryStore::Memory);
        assert_eq!(HistoryStore::parse("sqlite"), HistoryStore::Memory);
    }
}
