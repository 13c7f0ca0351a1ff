//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini API with no domain-specific logic.
//! Supports one-shot content generation and stateful multi-turn chat
//! sessions with system instructions and opaque tool declarations.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//! use serde_json::json;
//!
//! let client = GeminiClient::from_env()?;
//!
//! let mut chat = client
//!     .chat("gemini-2.5-flash")
//!     .system("You are a research assistant")
//!     .tool(json!({ "googleSearch": {} }))
//!     .max_output_tokens(8192)
//!     .build();
//!
//! let reply = chat.send_message("Find info about Rust").await?;
//! let followup = chat.send_message("Anything newer?").await?; // same transcript
//! ```

pub mod chat;
pub mod error;
pub mod types;

pub use chat::{ChatBuilder, ChatSession};
pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Public Gemini API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a chat session builder with the specified model.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut chat = client
    ///     .chat("gemini-2.5-flash")
    ///     .system("You are a helpful assistant")
    ///     .build();
    /// let reply = chat.send_message("Hello!").await?;
    /// ```
    pub fn chat(&self, model: impl Into<String>) -> ChatBuilder<'_> {
        ChatBuilder::new(self, model)
    }

    /// One `generateContent` round trip.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model,
            duration_ms = start.elapsed().as_millis() as u64,
            candidates = body.candidates.len(),
            "Gemini generate_content"
        );

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_from_env_missing_key_is_config_error() {
        std::env::remove_var("GEMINI_API_KEY");
        let err = GeminiClient::from_env().unwrap_err();
        assert!(matches!(err, GeminiError::Config(_)));
    }
}
