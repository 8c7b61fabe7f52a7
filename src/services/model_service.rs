use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{BackendError, BackendResult},
};

/// One system + user exchange with the generative backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Boundary to the generative backend.
///
/// Implementations must bound every call in time and report every failure
/// as a [`BackendError`]; callers always have a deterministic fallback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the model's reply parsed as a JSON object.
    async fn complete_json(&self, request: &ChatRequest) -> BackendResult<Value>;
}

pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiModelService {
    pub fn new(
        api_key: &SecretString,
        api_base: Option<&str>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(base) = api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: model.into(),
            timeout,
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiModelService {
    async fn complete_json(&self, request: &ChatRequest) -> BackendResult<Value> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user }
            ],
            "temperature": request.temperature,
            "response_format": { "type": "json_object" }
        });

        let response: Value =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(payload))
                .await
                .map_err(|_| BackendError::Timeout(self.timeout.as_secs()))?
                .map_err(|e| BackendError::Request(e.to_string()))?;

        parse_json_object(message_content(&response)?)
    }
}

/// Stand-in used when no API key is configured: every call fails fast.
pub struct UnavailableModel;

#[async_trait]
impl LanguageModel for UnavailableModel {
    async fn complete_json(&self, _request: &ChatRequest) -> BackendResult<Value> {
        Err(BackendError::Unavailable)
    }
}

pub fn build_language_model(config: &Config) -> Arc<dyn LanguageModel> {
    match &config.openai_api_key {
        Some(api_key) => {
            log::info!(
                "Using OpenAI model '{}' with a {}s timeout",
                config.openai_model,
                config.model_timeout_secs
            );
            Arc::new(OpenAiModelService::new(
                api_key,
                config.openai_api_base.as_deref(),
                config.openai_model.clone(),
                config.model_timeout(),
            ))
        }
        None => Arc::new(UnavailableModel),
    }
}

fn message_content(response: &Value) -> BackendResult<&str> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
        .ok_or(BackendError::EmptyResponse)
}

pub(crate) fn parse_json_object(content: &str) -> BackendResult<Value> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| BackendError::InvalidJson(e.to_string()))?;

    if !value.is_object() {
        return Err(BackendError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    Ok(value)
}
