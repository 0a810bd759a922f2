//! Client-side adapter that forwards to this crate's server functions.

use super::ChatSession;
use super::ChatSessionId;
use super::ChatTurn;
use super::InferenceError;
use super::InferenceService;
use crate::ApiError;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoteInference;

/// A conversation hosted by the server.
///
/// No server-side session exists until the first send. Every reply carries
/// the handle for the next turn, which replaces the stored one when the
/// server had to start a new session.
#[derive(Clone, Debug)]
pub struct RemoteChatSession {
    system_instruction: Arc<str>,
    id: Arc<Mutex<Option<ChatSessionId>>>,
}

impl PartialEq for RemoteChatSession {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.id, &other.id)
    }
}

impl RemoteChatSession {
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Releases the server-side session, if one was ever registered.
    pub async fn close(&self) {
        let id = self.id.lock().await.take();
        if let Some(id) = id {
            if let Err(e) = crate::close_chat_session(id.clone()).await {
                dioxus_logger::tracing::warn!("failed to close chat session {}: {}", id, e);
            }
        }
    }
}

fn transport(err: ApiError) -> InferenceError {
    InferenceError::Transport(err.to_string())
}

/// Stores the handle a turn came back with and yields its reply.
fn adopt(slot: &mut Option<ChatSessionId>, turn: ChatTurn) -> String {
    if slot.as_ref() != Some(&turn.session) {
        dioxus_logger::tracing::debug!("chat continues on session {}", turn.session);
        *slot = Some(turn.session);
    }
    turn.reply
}

impl ChatSession for RemoteChatSession {
    async fn send(&self, message: &str) -> Result<String, InferenceError> {
        let mut slot = self.id.lock().await;
        let turn = crate::chat_send(
            slot.clone(),
            self.system_instruction.to_string(),
            message.to_string(),
        )
        .await
        .map_err(transport)?;

        Ok(adopt(&mut slot, turn))
    }
}

impl InferenceService for RemoteInference {
    type Session = RemoteChatSession;

    fn create_session(&self, system_instruction: &str) -> RemoteChatSession {
        RemoteChatSession {
            system_instruction: Arc::from(system_instruction),
            id: Arc::new(Mutex::new(None)),
        }
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, InferenceError> {
        crate::generate_once(prompt.to_string())
            .await
            .map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(session: &ChatSessionId, reply: &str) -> ChatTurn {
        ChatTurn {
            session: session.clone(),
            reply: reply.to_string(),
        }
    }

    #[test]
    fn first_turn_stores_the_handle() {
        let id = ChatSessionId::new_random();
        let mut slot = None;
        assert_eq!(adopt(&mut slot, turn(&id, "hi")), "hi");
        assert_eq!(slot, Some(id));
    }

    #[test]
    fn replacement_session_replaces_the_stale_handle() {
        let stale = ChatSessionId::new_random();
        let fresh = ChatSessionId::new_random();
        let mut slot = Some(stale);

        adopt(&mut slot, turn(&fresh, "after restart"));
        assert_eq!(slot, Some(fresh.clone()));

        adopt(&mut slot, turn(&fresh, "next"));
        assert_eq!(slot, Some(fresh));
    }

    #[test]
    fn sessions_compare_by_identity() {
        let a = RemoteInference.create_session("same");
        let b = RemoteInference.create_session("same");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.system_instruction(), "same");
    }
}
