//! Adapters for the hosted generative-language service.
//!
//! Two operations are consumed: a stateful conversation ([`ChatSession`],
//! created by [`InferenceService::create_session`]) and a stateless one-shot
//! generation ([`InferenceService::generate_once`]). The browser never talks to
//! the service directly; it goes through [`remote::RemoteInference`], which
//! calls this crate's server functions, which in turn drive
//! `gemini::GeminiClient`.

#[cfg(not(target_arch = "wasm32"))]
pub mod gemini;
pub mod remote;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use serde::Deserialize;
use serde::Serialize;

/// Sampling parameters sent with every request. Fixed, not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
}

/// Used for chat turns.
pub const CHAT_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    top_k: 40,
};

/// Used for one-shot generation (the roadmap tool).
pub const ONE_SHOT_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.8,
    top_k: 40,
};

/// Opaque server-side handle for one conversation. The client passes it back
/// unchanged on every turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatSessionId(String);

impl ChatSessionId {
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn new_random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ChatSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One answered chat turn. `session` is the handle to use for the next turn;
/// it differs from the one sent when the server had to start over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub session: ChatSessionId,
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("inference service is not configured: {0}")]
    NotConfigured(String),

    #[error("request to inference service failed: {0}")]
    Transport(String),

    #[error("inference service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed inference response: {0}")]
    Malformed(String),
}

/// One conversation with the service. Its system instruction is fixed at
/// creation; history is kept for the lifetime of the handle.
pub trait ChatSession {
    /// Sends a user message and returns the assistant's reply text, which may
    /// be empty if the service produced no text.
    async fn send(&self, message: &str) -> Result<String, InferenceError>;
}

pub trait InferenceService {
    type Session: ChatSession;

    /// Creates a new conversation seeded with `system_instruction`.
    fn create_session(&self, system_instruction: &str) -> Self::Session;

    /// Single prompt in, text out. No conversation state is kept.
    async fn generate_once(&self, prompt: &str) -> Result<String, InferenceError>;
}
