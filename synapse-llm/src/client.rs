use std::fmt;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::AttemptError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// Body of one chat-completions request.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub max_tokens: u32,
    pub temperature: f64,
}

impl<'a> ChatRequest<'a> {
    pub fn new(
        model: &'a str,
        system: &'a str,
        user: &'a str,
        max_tokens: u32,
        temperature: f64,
    ) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: system,
                },
                ChatMessage {
                    role: Role::User,
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Sends a single chat-completions request and returns the raw reply text.
#[async_trait]
pub trait ChatTransport: Send + Sync + fmt::Debug {
    async fn send(&self, request: &ChatRequest<'_>) -> Result<String, AttemptError>;
}

/// HTTPS transport for Mistral's OpenAI-compatible endpoint.
#[derive(Debug)]
pub struct MistralTransport {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    timeout: Option<Duration>,
}

impl MistralTransport {
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: SecretString::from(config.api_key.expose_secret().to_owned()),
            timeout: config.timeout,
        })
    }

    fn network_error(&self, model: &str, source: &reqwest::Error) -> AttemptError {
        let message = match self.timeout {
            Some(timeout) if source.is_timeout() => {
                format!("request timed out after {}s", timeout.as_secs())
            }
            _ => source.to_string(),
        };

        AttemptError::Network {
            model: model.to_owned(),
            message,
        }
    }
}

#[async_trait]
impl ChatTransport for MistralTransport {
    async fn send(&self, request: &ChatRequest<'_>) -> Result<String, AttemptError> {
        let model = request.model;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|source| self.network_error(model, &source))?;

        let status = response.status();
        debug!(model, status = status.as_u16(), "chat completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::from_status(model, status.as_u16(), body));
        }

        let payload: ChatResponse = response.json().await.map_err(|source| {
            if source.is_decode() {
                AttemptError::Unknown {
                    model: model.to_owned(),
                    message: format!("malformed response body: {source}"),
                }
            } else {
                self.network_error(model, &source)
            }
        })?;

        payload.into_content().ok_or_else(|| AttemptError::Unknown {
            model: model.to_owned(),
            message: "response contained no message content".to_owned(),
        })
    }
}
