//! Stateful multi-turn chat sessions.
//!
//! A [`ChatSession`] owns the full transcript and replays it on every call,
//! which is what gives the model memory of earlier turns. Turns are
//! appended only when a round trip succeeds, so a failed call leaves the
//! transcript exactly as it was.

use tracing::{debug, info, warn};

use crate::types::{Content, GenerateContentRequest, GenerationConfig, SystemInstruction};
use crate::{GeminiClient, GeminiError, Result};

/// Builder for creating a ChatSession.
pub struct ChatBuilder<'a> {
    client: &'a GeminiClient,
    model: String,
    system_instruction: Option<String>,
    tools: Vec<serde_json::Value>,
    generation_config: GenerationConfig,
}

impl<'a> ChatBuilder<'a> {
    /// Create a new chat builder.
    pub(crate) fn new(client: &'a GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            system_instruction: None,
            tools: Vec::new(),
            generation_config: GenerationConfig::default(),
        }
    }

    /// Set the system instruction for the whole session.
    pub fn system(mut self, prompt: impl Into<String>) -> Self {
        self.system_instruction = Some(prompt.into());
        self
    }

    /// Add an opaque tool declaration, passed through to the API verbatim
    /// (e.g. `json!({ "googleSearch": {} })`).
    pub fn tool(mut self, declaration: serde_json::Value) -> Self {
        self.tools.push(declaration);
        self
    }

    /// Set the output token budget per reply.
    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.generation_config.max_output_tokens = Some(max);
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.generation_config.temperature = Some(temp);
        self
    }

    /// Build the session with an empty transcript.
    pub fn build(self) -> ChatSession {
        ChatSession {
            client: self.client.clone(),
            model: self.model,
            system_instruction: self.system_instruction,
            tools: self.tools,
            generation_config: self.generation_config,
            history: Vec::new(),
        }
    }
}

/// One ongoing conversation with the model.
///
/// The session owns a clone of the client, so it can outlive the builder
/// and be handed to whatever drives the conversation.
pub struct ChatSession {
    client: GeminiClient,
    model: String,
    system_instruction: Option<String>,
    tools: Vec<serde_json::Value>,
    generation_config: GenerationConfig,
    history: Vec<Content>,
}

impl ChatSession {
    /// Send one message and return the model's textual reply.
    ///
    /// The request carries the entire transcript plus this message. A reply
    /// that hits the output token budget is returned as-is after logging a
    /// truncation warning; a reply with no text at all is an [`GeminiError::Api`]
    /// error and the transcript is left unchanged.
    pub async fn send_message(&mut self, text: impl Into<String>) -> Result<String> {
        let text = text.into();

        let mut contents = self.history.clone();
        contents.push(Content::user(text.as_str()));

        let request = GenerateContentRequest {
            system_instruction: self
                .system_instruction
                .as_deref()
                .map(SystemInstruction::new),
            contents,
            tools: self.tools.clone(),
            generation_config: Some(self.generation_config.clone()),
        };

        info!(
            model = %self.model,
            history_turns = self.history.len(),
            prompt_len = text.len(),
            "Sending chat message"
        );

        let response = self.client.generate_content(&self.model, &request).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(GeminiError::Api(format!("Prompt blocked: {}", reason)));
        }

        if response.finish_reason() == Some("MAX_TOKENS") {
            // The reply below is a prefix of what the model wanted to send.
            warn!(model = %self.model, "Reply truncated at the output token budget");
        }

        let reply = response
            .text()
            .ok_or_else(|| GeminiError::Api("No text in model reply".into()))?;

        debug!(reply_len = reply.len(), "Chat reply received");

        self.history = request.contents;
        self.history.push(Content::model(reply.as_str()));

        Ok(reply)
    }

    /// The model this session talks to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Transcript of completed turns, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }
}
