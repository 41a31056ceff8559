//! OpenAI-compatible chat completions provider.
//!
//! Works against any endpoint that speaks the `/chat/completions` protocol.
//! The default configuration targets Groq.
//!
//! ```ignore
//! let config = OpenAICompatConfig::new(api_key)
//!     .with_model("llama-3.3-70b-versatile")
//!     .with_base_url("https://api.groq.com/openai/v1");
//!
//! let provider = OpenAICompatProvider::new(config)?;
//! ```
//!
//! Calls are made once. A failed or timed-out call surfaces as an
//! [`AIError`] and the caller decides whether to fall back.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Configuration for the chat completions provider.
#[derive(Debug, Clone)]
pub struct OpenAICompatConfig {
    api_key: Secret<String>,
    /// Model identifier sent with every request.
    pub model: String,
    /// Base URL without the trailing `/chat/completions`.
    pub base_url: String,
    /// HTTP timeout for a single call.
    pub timeout: Duration,
}

impl OpenAICompatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "llama-3.3-70b-versatile".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&AiConfig> for OpenAICompatConfig {
    fn from(config: &AiConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }
}

/// Provider backed by an OpenAI-compatible HTTP API.
pub struct OpenAICompatProvider {
    config: OpenAICompatConfig,
    client: Client,
}

impl OpenAICompatProvider {
    /// Builds the provider and its HTTP client.
    pub fn new(config: OpenAICompatConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> ChatRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| ChatMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: Some(msg.content.clone()),
            })
            .collect();

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(parse_retry_after(&error_body))),
            400 | 404 | 422 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let wire: ChatResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        completion_from_wire(wire, &self.config.model)
    }
}

#[async_trait]
impl AIProvider for OpenAICompatProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            purpose = %request.metadata.purpose,
            model = %self.config.model,
            "sending chat completion"
        );

        let response = self.send_request(&request).await?;
        let completion = self.parse_response(response).await?;

        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "chat completion received"
        );

        Ok(completion)
    }

    fn provider_info(&self) -> ProviderInfo {
        let name = if self.config.base_url.contains("groq.com") {
            "groq"
        } else {
            "openai-compatible"
        };
        ProviderInfo::new(name, self.config.model.clone())
    }
}

fn completion_from_wire(wire: ChatResponse, fallback_model: &str) -> Result<CompletionResponse, AIError> {
    let choice = wire
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    let usage = wire
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: choice.message.content.unwrap_or_default(),
        usage,
        model: wire.model.unwrap_or_else(|| fallback_model.to_string()),
        finish_reason,
    })
}

/// Extracts "try again in Ns" from a rate limit body. Defaults to 30s.
fn parse_retry_after(error_body: &str) -> u32 {
    serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|parsed| {
            let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
            let idx = message.find("try again in ")?;
            let digits: String = message[idx + 13..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(30)
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: Option<String>,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::{CompletionPurpose, RequestMetadata};

    fn provider() -> OpenAICompatProvider {
        OpenAICompatProvider::new(OpenAICompatConfig::new("gsk_test")).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAICompatConfig::new("key")
            .with_model("llama-3.1-8b-instant")
            .with_base_url("http://localhost:11434/v1/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn completions_url_appends_path() {
        assert_eq!(
            provider().completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn provider_info_names_groq() {
        let info = provider().provider_info();
        assert_eq!(info.name, "groq");
        assert_eq!(info.model, "llama-3.3-70b-versatile");

        let local = OpenAICompatProvider::new(
            OpenAICompatConfig::new("k").with_base_url("http://localhost:8000/v1"),
        )
        .unwrap();
        assert_eq!(local.provider_info().name, "openai-compatible");
    }

    #[test]
    fn wire_request_carries_sampling_parameters() {
        let request = CompletionRequest::new(RequestMetadata::new(
            UserId::new(),
            CompletionPurpose::DecisionAdvice,
        ))
        .with_message(MessageRole::User, "Should I take the course?")
        .with_max_tokens(800)
        .with_temperature(0.25);

        let wire = provider().to_wire_request(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Should I take the course?");
        assert!((json["temperature"].as_f64().unwrap() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn wire_request_omits_unset_limits() {
        let request = CompletionRequest::new(RequestMetadata::new(
            UserId::new(),
            CompletionPurpose::EmotionInterpretation,
        ));
        let json = serde_json::to_value(provider().to_wire_request(&request)).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn completion_parsed_from_wire_body() {
        let wire: ChatResponse = serde_json::from_str(
            r#"{
                "model": "llama-3.3-70b-versatile",
                "choices": [{"message": {"role": "assistant", "content": "{\"a\":1}"}, "finish_reason": "length"}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 30, "total_tokens": 42}
            }"#,
        )
        .unwrap();

        let completion = completion_from_wire(wire, "fallback").unwrap();
        assert_eq!(completion.content, "{\"a\":1}");
        assert_eq!(completion.finish_reason, FinishReason::Length);
        assert_eq!(completion.usage.total_tokens, 42);
        assert_eq!(completion.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn empty_choices_is_parse_error() {
        let wire: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            completion_from_wire(wire, "m"),
            Err(AIError::Parse(_))
        ));
    }

    #[test]
    fn null_content_becomes_empty_string() {
        let wire: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]}"#,
        )
        .unwrap();
        let completion = completion_from_wire(wire, "m").unwrap();
        assert_eq!(completion.content, "");
        assert_eq!(completion.model, "m");
    }

    #[test]
    fn parse_retry_after_from_message() {
        let body = r#"{"error": {"message": "Rate limit reached. Please try again in 7s."}}"#;
        assert_eq!(parse_retry_after(body), 7);
    }

    #[test]
    fn parse_retry_after_default() {
        assert_eq!(parse_retry_after("not json"), 30);
    }
}
