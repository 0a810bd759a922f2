//! Holds the live chat sessions behind the chat server functions.

use crate::inference::gemini::GeminiChat;
use crate::inference::gemini::GeminiClient;
use crate::inference::ChatSession;
use crate::inference::ChatSessionId;
use dioxus_logger::tracing;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

/// Sessions untouched for this long are dropped when new ones are created.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

struct Entry<S> {
    session: Arc<S>,
    last_used: Instant,
}

/// A keyed registry of chat sessions with idle eviction.
pub struct SessionStore<S> {
    sessions: RwLock<HashMap<ChatSessionId, Entry<S>>>,
    idle_ttl: Duration,
}

impl<S: ChatSession> SessionStore<S> {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Returns the live session registered under `id` and marks it as used.
    ///
    /// When `id` is absent, unknown or idle past the TTL (evicted, or lost in a
    /// restart) a fresh session is built with `make` and registered under a
    /// new id. Callers must use the returned id from then on.
    pub async fn resume_or_insert(
        &self,
        id: Option<&ChatSessionId>,
        make: impl FnOnce() -> S,
    ) -> (ChatSessionId, Arc<S>) {
        if let Some(id) = id {
            if let Some(session) = self.get(id).await {
                return (id.clone(), session);
            }
            tracing::info!("chat session {} is gone; starting a new one", id);
        }
        self.insert(make()).await
    }

    /// Registers `session` under a fresh id, evicting idle sessions first.
    async fn insert(&self, session: S) -> (ChatSessionId, Arc<S>) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_used) < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!("evicted {} idle chat sessions", evicted);
        }

        let id = ChatSessionId::new_random();
        let session = Arc::new(session);
        sessions.insert(
            id.clone(),
            Entry {
                session: session.clone(),
                last_used: now,
            },
        );
        (id, session)
    }

    /// Looks up a live session and marks it as used. Idle sessions are dropped.
    async fn get(&self, id: &ChatSessionId) -> Option<Arc<S>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        if now.duration_since(entry.last_used) >= self.idle_ttl {
            sessions.remove(id);
            return None;
        }
        entry.last_used = now;
        Some(entry.session.clone())
    }

    /// Drops a session. Returns whether it existed.
    pub async fn remove(&self, id: &ChatSessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// The process-wide Gemini client, configured from the environment on first use.
pub async fn gemini_client() -> &'static GeminiClient {
    static CLIENT: OnceCell<GeminiClient> = OnceCell::const_new();
    CLIENT
        .get_or_init(|| async {
            let client = GeminiClient::from_env();
            tracing::info!("gemini client initialized");
            client
        })
        .await
}

/// The process-wide session store for Gemini chats.
pub async fn session_store() -> &'static SessionStore<GeminiChat> {
    static STORE: OnceCell<SessionStore<GeminiChat>> = OnceCell::const_new();
    STORE
        .get_or_init(|| async { SessionStore::new(SESSION_IDLE_TTL) })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::testing::FakeInference;
    use crate::inference::InferenceService;

    #[tokio::test]
    async fn resume_returns_the_registered_session() {
        let fake = FakeInference::new();
        let store = SessionStore::new(SESSION_IDLE_TTL);

        let (id, _) = store
            .resume_or_insert(None, || fake.create_session("fa"))
            .await;
        let (resumed, session) = store
            .resume_or_insert(Some(&id), || fake.create_session("unused"))
            .await;

        assert_eq!(resumed, id);
        assert_eq!(session.system_instruction(), "fa");
        // `make` only runs when a session has to be built
        assert_eq!(fake.created_sessions(), vec!["fa".to_string()]);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_forgets_the_session() {
        let fake = FakeInference::new();
        let store = SessionStore::new(SESSION_IDLE_TTL);
        let (id, _) = store.resume_or_insert(None, || fake.create_session("x")).await;

        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let fake = FakeInference::new();
        let store = SessionStore::new(SESSION_IDLE_TTL);
        let (a, _) = store.resume_or_insert(None, || fake.create_session("x")).await;
        let (b, _) = store.resume_or_insert(None, || fake.create_session("x")).await;
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_on_insert() {
        let fake = FakeInference::new();
        let store = SessionStore::new(Duration::from_millis(20));

        let (old, _) = store.resume_or_insert(None, || fake.create_session("old")).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        let (new, _) = store.resume_or_insert(None, || fake.create_session("new")).await;

        assert_ne!(old, new);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn sending_on_an_evicted_session_starts_a_new_one() {
        let fake = FakeInference::new();
        let store = SessionStore::new(Duration::from_millis(20));

        let (stale, _) = store
            .resume_or_insert(None, || fake.create_session("fa"))
            .await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        store.resume_or_insert(None, || fake.create_session("other")).await;

        // every retry with the stale id keeps working, on one replacement session
        let (fresh, session) = store
            .resume_or_insert(Some(&stale), || fake.create_session("fa"))
            .await;
        assert_ne!(fresh, stale);
        assert_eq!(session.system_instruction(), "fa");

        let (again, _) = store
            .resume_or_insert(Some(&fresh), || fake.create_session("fa"))
            .await;
        assert_eq!(again, fresh);
    }

    #[tokio::test]
    async fn unknown_ids_get_a_new_session() {
        let fake = FakeInference::new();
        let store = SessionStore::new(SESSION_IDLE_TTL);
        let (_, known) = store.resume_or_insert(None, || fake.create_session("a")).await;

        let lost = ChatSessionId::new_random();
        let (id, session) = store
            .resume_or_insert(Some(&lost), || fake.create_session("b"))
            .await;
        assert_ne!(id, lost);
        assert_eq!(session.system_instruction(), "b");
        assert_eq!(known.system_instruction(), "a");
    }
}
