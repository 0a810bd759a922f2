//! Scripted in-memory inference adapters for tests. No network.

use super::ChatSession;
use super::InferenceError;
use super::InferenceService;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<String, InferenceError>>,
    created: Vec<String>,
    sent: Vec<(String, String)>,
    prompts: Vec<String>,
}

/// A fake service. Replies are consumed in order by both chat sends and
/// one-shot generations; when the script runs dry every call fails with
/// [`InferenceError::Transport`].
#[derive(Clone, Default)]
pub struct FakeInference {
    script: Arc<Mutex<Script>>,
}

impl FakeInference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, text: impl Into<String>) -> &Self {
        self.lock().replies.push_back(Ok(text.into()));
        self
    }

    pub fn push_failure(&self, error: InferenceError) -> &Self {
        self.lock().replies.push_back(Err(error));
        self
    }

    /// System instructions of every session created so far.
    pub fn created_sessions(&self) -> Vec<String> {
        self.lock().created.clone()
    }

    /// `(system_instruction, message)` for every chat send so far.
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.lock().sent.clone()
    }

    /// Every one-shot prompt so far.
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn next_reply(&self) -> Result<String, InferenceError> {
        self.lock()
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(InferenceError::Transport("no scripted reply".to_string())))
    }
}

#[derive(Clone)]
pub struct FakeChatSession {
    service: FakeInference,
    system_instruction: String,
}

impl FakeChatSession {
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

impl ChatSession for FakeChatSession {
    async fn send(&self, message: &str) -> Result<String, InferenceError> {
        self.service
            .lock()
            .sent
            .push((self.system_instruction.clone(), message.to_string()));
        self.service.next_reply()
    }
}

impl InferenceService for FakeInference {
    type Session = FakeChatSession;

    fn create_session(&self, system_instruction: &str) -> FakeChatSession {
        self.lock().created.push(system_instruction.to_string());
        FakeChatSession {
            service: self.clone(),
            system_instruction: system_instruction.to_string(),
        }
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, InferenceError> {
        self.lock().prompts.push(prompt.to_string());
        self.next_reply()
    }
}
