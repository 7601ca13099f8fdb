//! Scripted text generator
//!
//! Test support: replays a fixed list of answers, one per call, and records
//! the prompts it was given. Public so the integration tests under `tests/`
//! can drive the router without network access; the binary always uses
//! [`super::GeminiClient`].

use super::error::{ProposerError, ProposerResult};
use super::proposer::TextGenerator;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    /// Returned for every call once `replies` is exhausted
    fallback: Option<Result<String, String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Answers `replies` in order, then fails with "script exhausted"
    pub fn new<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.to_string())).collect()),
            ..Default::default()
        }
    }

    /// Fails every call with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            fallback: Some(Err(message.to_string())),
            ..Default::default()
        }
    }

    /// Queue a failure after the replies already scripted
    pub fn then_fail(self, message: &str) -> Self {
        self.replies.lock().push_back(Err(message.to_string()));
        self
    }

    /// Number of completed calls
    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _credential: &str, prompt: &str) -> ProposerResult<String> {
        self.prompts.lock().push(prompt.to_string());

        let next = self.replies.lock().pop_front();
        match next.or_else(|| self.fallback.clone()) {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ProposerError::Service(message)),
            None => Err(ProposerError::Service("script exhausted".to_string())),
        }
    }
}
