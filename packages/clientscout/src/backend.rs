//! Gemini-backed extraction sessions.
//!
//! Wires the prompt contract into a [`gemini_client::ChatSession`] and
//! adapts it to the [`ChatBackend`] seam. Enabled by the `gemini` feature
//! (on by default); the rest of the pipeline has no provider knowledge.

use async_trait::async_trait;
use gemini_client::{ChatSession, GeminiClient};
use serde_json::json;

use crate::error::{Result, ScoutError};
use crate::pipeline::prompts::SYSTEM_INSTRUCTION;
use crate::traits::ChatBackend;

/// Default generative model for extraction sessions.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Output budget per reply. Large tables can hit this; the session logs a
/// truncation warning and the parser keeps whatever complete rows arrived.
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Open a conversational extraction session.
///
/// The session carries the standing extraction contract as its system
/// instruction and declares the live-lookup tools the backend needs for
/// the retrieval and enrichment phases. One session per search; "more"
/// rounds must reuse it so the backend knows which rows it already
/// returned.
pub fn open_session(client: &GeminiClient, model: &str) -> ChatSession {
    client
        .chat(model)
        .system(SYSTEM_INSTRUCTION)
        .tool(json!({ "googleMaps": {}, "googleSearch": {} }))
        .max_output_tokens(MAX_OUTPUT_TOKENS)
        .build()
}

/// Open a session on a client configured from `GEMINI_API_KEY`.
///
/// A missing key fails here, before any network call is made.
pub fn open_session_from_env(model: &str) -> Result<ChatSession> {
    let client = GeminiClient::from_env().map_err(|e| ScoutError::Config(e.to_string()))?;
    Ok(open_session(&client, model))
}

#[async_trait]
impl ChatBackend for ChatSession {
    async fn send(&mut self, message: &str) -> Result<String> {
        self.send_message(message)
            .await
            .map_err(|e| ScoutError::Backend(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_session_applies_extraction_contract() {
        let client = GeminiClient::new("test-key");
        let session = open_session(&client, DEFAULT_MODEL);

        assert_eq!(session.model(), DEFAULT_MODEL);
        assert!(session.history().is_empty());
    }
}
