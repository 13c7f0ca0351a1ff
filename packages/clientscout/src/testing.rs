//! Test doubles for the pipeline.
//!
//! [`ScriptedBackend`] stands in for a live session: it replays canned
//! reply text per call and records every prompt it was sent, so parser and
//! merge behavior can be exercised without a network or an API key.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::{Result, ScoutError};
use crate::traits::ChatBackend;

/// A chat backend that replays scripted replies in call order.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: VecDeque<ScriptedReply>,
    prompts: Vec<String>,
}

#[derive(Debug)]
enum ScriptedReply {
    Text(String),
    Error(String),
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next unanswered call.
    pub fn with_reply(mut self, text: impl Into<String>) -> Self {
        self.replies.push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a failure for the next unanswered call.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.replies.push_back(ScriptedReply::Error(message.into()));
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        match self.replies.pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Error(message)) => Err(ScoutError::Backend(message.into())),
            None => Err(ScoutError::Backend(
                "scripted backend has no reply queued".into(),
            )),
        }
    }
}
