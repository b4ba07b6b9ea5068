//! Chat Completions client.
//!
//! Every stage talks to the model through [`CompletionService`], so the
//! HTTP client is built once in `main` and handed down by reference.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::message::ChatMessage;
use crate::config::{AppConfig, Credentials};

/// Something that turns a conversation into a single text completion.
pub trait CompletionService {
    /// Sends `messages` and returns the completion text.
    ///
    /// Transport and service failures are errors; an empty completion is not.
    fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// First choice's text, trimmed. Missing or null content reads as empty.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig, credentials: &Credentials) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base_url.trim_end_matches('/')),
            api_key: credentials.api_key().to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .with_context(|| format!("Request to {} failed", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("Completion service returned {}: {}", status, body);
        }

        let parsed: ChatResponse = response
            .json()
            .context("Failed to decode completion response")?;
        Ok(parsed.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::user("Odpověz pouze 'Ano' nebo 'Ne'.")];
        let request = ChatRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: 0.5,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_text_is_trimmed() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "  Ano \n"}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "Ano");
    }

    #[test]
    fn test_null_or_missing_content_is_empty() {
        let null_content: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(null_content.into_text(), "");

        let no_choices: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(no_choices.into_text(), "");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let mut config = AppConfig::default();
        config.api_base_url = "http://localhost:8080/v1/".to_string();
        let credentials = Credentials::from_key("sk-test");

        let client = OpenAiClient::new(&config, &credentials).unwrap();
        assert_eq!(client.endpoint, "http://localhost:8080/v1/chat/completions");
    }
}
