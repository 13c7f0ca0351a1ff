//! Gemini API request and response types.
//!
//! Wire names follow the API's camelCase JSON; Rust field names stay
//! snake_case via serde renames.

use serde::{Deserialize, Serialize};

// =============================================================================
// Conversation
// =============================================================================

/// One conversation turn: a role plus its content parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default)]
    pub role: String,

    /// Content parts; replies may carry non-text parts, which are ignored.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}

/// A single content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

// =============================================================================
// Generate Content
// =============================================================================

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Session-level instruction applied to every turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Full conversation so far, oldest turn first.
    pub contents: Vec<Content>,

    /// Opaque tool declarations (e.g. `{"googleSearch": {}}`). Passed
    /// through verbatim; the client attaches no meaning to them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// System instruction wrapper (parts only, no role).
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Create a system instruction from plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }
}

/// Generation parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Output token budget per reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if any text came back.
    pub fn text(&self) -> Option<String> {
        let text = self.candidates.first()?.content.as_ref()?.text();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Finish reason of the first candidate.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,

    /// "STOP", "MAX_TOKENS", "SAFETY", ...
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself (e.g. safety blocks).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_constructors() {
        let user = Content::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.text(), "Hello");

        let model = Content::model("Hi there");
        assert_eq!(model.role, "model");
        assert_eq!(model.text(), "Hi there");
    }

    #[test]
    fn test_content_text_concatenates_parts() {
        let content = Content {
            role: "model".to_string(),
            parts: vec![Part::text("Hello, "), Part { text: None }, Part::text("world")],
        };
        assert_eq!(content.text(), "Hello, world");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            system_instruction: Some(SystemInstruction::new("Be terse.")),
            contents: vec![Content::user("Hi")],
            tools: vec![serde_json::json!({ "googleSearch": {} })],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(8192),
                temperature: None,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert!(json.get("generationConfig").is_some());
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
        assert!(json["generationConfig"].get("temperature").is_none());
        assert_eq!(json["tools"][0]["googleSearch"], serde_json::json!({}));
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_request_skips_empty_optional_fields() {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user("Hi")],
            tools: Vec::new(),
            generation_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
        assert!(json.get("tools").is_none());
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_text_extraction() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "| Name | Phone |" }]
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("| Name | Phone |"));
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.text(), None);
        assert_eq!(response.finish_reason(), None);
    }
}
