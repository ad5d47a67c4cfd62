use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{BackendError, ModelBackend, Result, Speaker, Turn};

/// Backend talking to a local Ollama server over its `/api/chat` endpoint.
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn role(speaker: Speaker) -> &'static str {
        match speaker {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
            Speaker::System => "system",
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    async fn converse(&self, turns: &[Turn]) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: turns
                .iter()
                .map(|turn| WireMessage {
                    role: Self::role(turn.speaker),
                    content: &turn.text,
                })
                .collect(),
            stream: false,
        };

        log::debug!(
            "sending {} turns to ollama model '{}'",
            turns.len(),
            self.model
        );

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            log::warn!("ollama chat request failed with HTTP {}", status);
            return Err(BackendError::Api(format!("HTTP {}: {}", status, text)));
        }

        let text = response.text().await?;
        let reply: ChatResponse = serde_json::from_str(&text)?;
        match reply.message {
            Some(message) if !message.content.is_empty() => Ok(message.content),
            _ => Err(BackendError::NoReply),
        }
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(BackendError::Api(format!("HTTP {}: {}", status, text)));
        }

        let text = response.text().await?;
        let tags: TagsResponse = serde_json::from_str(&text)?;
        Ok(tags.models.into_iter().map(|model| model.name).collect())
    }
}
