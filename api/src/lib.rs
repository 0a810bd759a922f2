//! This crate contains the shared content model and all fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
mod chat_sessions;
pub mod inference;
pub mod locale;
pub mod prefs;

use dioxus::prelude::*;
use inference::ChatSessionId;
use inference::ChatTurn;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the site's starting preferences.
///
/// These come from env vars on the server, so a deployment can pick its
/// default language and theme without a rebuild.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Sends one user message within a conversation.
///
/// `session` is the handle from the previous turn, or `None` for the first
/// one. A missing, evicted or forgotten session is replaced by a new one
/// seeded with `system_instruction`, so the caller can always continue.
#[post("/api/chat/send")]
pub async fn chat_send(
    session: Option<ChatSessionId>,
    system_instruction: String,
    message: String,
) -> Result<ChatTurn, ApiError> {
    use inference::ChatSession;
    use inference::InferenceService;

    let client = chat_sessions::gemini_client().await;
    let (id, chat) = chat_sessions::session_store()
        .await
        .resume_or_insert(session.as_ref(), || {
            client.create_session(&system_instruction)
        })
        .await;
    if session.as_ref() != Some(&id) {
        dioxus_logger::tracing::info!("created chat session {}", id);
    }

    match chat.send(&message).await {
        Ok(reply) => Ok(ChatTurn { session: id, reply }),
        Err(e) => {
            dioxus_logger::tracing::warn!("chat session {} failed: {}", id, e);
            Err(e.into())
        }
    }
}

/// Discards a conversation. Unknown handles are ignored.
#[post("/api/chat/close")]
pub async fn close_chat_session(session: ChatSessionId) -> Result<(), ApiError> {
    if chat_sessions::session_store().await.remove(&session).await {
        dioxus_logger::tracing::info!("closed chat session {}", session);
    }
    Ok(())
}

/// Stateless prompt-in, text-out generation.
#[post("/api/generate_once")]
pub async fn generate_once(prompt: String) -> Result<String, ApiError> {
    use inference::InferenceService;

    match chat_sessions::gemini_client().await.generate_once(&prompt).await {
        Ok(text) => Ok(text),
        Err(e) => {
            dioxus_logger::tracing::warn!("one-shot generation failed: {}", e);
            Err(e.into())
        }
    }
}
