use crate::error::{BrowserError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// One chat message in the agent's conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }
}

/// Capability interface for the reasoning backend. The agent loop only needs
/// "messages in, text out"; planning happens on the other side of this seam.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a chat completion request and return the reply text
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}

/// OpenAI-compatible chat-completions backend (OpenAI, Azure, custom endpoints)
pub struct OpenAiChat {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChat {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        // Temperature 0: tool selection should be deterministic, not creative
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| BrowserError::LlmRequestFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BrowserError::LlmRequestFailed(format!("API error ({}): {}", status, error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BrowserError::LlmRequestFailed(format!("Failed to parse response: {}", e)))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| BrowserError::LlmRequestFailed("Response carried no message content".to_string()))?;

        Ok(content.to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(ChatMessage::system("s").role, "system");
        assert_eq!(ChatMessage::user("u").role, "user");
        assert_eq!(ChatMessage::assistant("a").role, "assistant");
    }

    #[test]
    fn test_messages_serialize_for_request_body() {
        let messages = vec![ChatMessage::system("be brief"), ChatMessage::user("hi")];
        let value = serde_json::to_value(&messages).unwrap();
        assert_eq!(value[0]["role"], "system");
        assert_eq!(value[1]["content"], "hi");
    }

    #[test]
    fn test_base_url_trailing_slash_tolerated() {
        let backend = OpenAiChat::new("k", DEFAULT_MODEL).with_base_url("https://proxy.example/v1/");
        assert_eq!(backend.base_url, "https://proxy.example/v1/");
        // complete() trims the trailing slash when building the URL
        assert_eq!(backend.model(), DEFAULT_MODEL);
    }
}
