//! OpenAI-compatible oracle adapter.
//!
//! Works with Groq (the default endpoint), OpenAI, or any chat-completions
//! compatible API. Vision prompts go to the vision model as multimodal
//! content; text prompts go to the text model as a plain string.

use crate::domain::DomainError;
use crate::ports::{OraclePort, OraclePrompt};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

const TEMPERATURE: f32 = 0.7;

/// Chat-completions oracle over HTTP.
pub struct OpenAiOracle {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    vision_model: String,
    text_model: String,
}

impl OpenAiOracle {
    /// Create a new oracle adapter.
    ///
    /// # Arguments
    /// * `api_url` - Endpoint (e.g., "https://api.groq.com/openai/v1/chat/completions")
    /// * `api_key` - Bearer token
    /// * `vision_model` - Model used when the prompt carries an image
    /// * `text_model` - Model used for text-only prompts
    /// * `timeout` - Upper bound for one request, connect to last byte
    pub fn new(
        api_url: String,
        api_key: String,
        vision_model: String,
        text_model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::OracleTransport(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            vision_model,
            text_model,
        })
    }

    fn model_for(&self, prompt: &OraclePrompt) -> &str {
        if prompt.is_vision() {
            &self.vision_model
        } else {
            &self.text_model
        }
    }

    fn build_request(&self, prompt: &OraclePrompt) -> ChatRequest {
        let user_content = match &prompt.image {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: prompt.user.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                    },
                },
            ]),
            None => MessageContent::Text(prompt.user.clone()),
        };

        ChatRequest {
            model: self.model_for(prompt).to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(prompt.system.clone()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_content,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: prompt.max_tokens,
        }
    }
}

/// Chat-completions request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat-completions response structure.
#[derive(Deserialize)]
struct ChatResponse {
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

#[async_trait::async_trait]
impl OraclePort for OpenAiOracle {
    async fn complete(&self, prompt: &OraclePrompt) -> Result<String, DomainError> {
        let request = self.build_request(prompt);
        info!(
            model = %request.model,
            vision = prompt.is_vision(),
            prompt_len = prompt.user.len(),
            "sending prompt to oracle"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::OracleTransport(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "oracle API returned error");
            return Err(DomainError::OracleTransport(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::OracleTransport(format!("Failed to parse API response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| DomainError::OracleTransport("No response choices returned".to_string()))?;

        debug!(raw_len = content.len(), "received oracle response");

        Ok(content)
    }
}
