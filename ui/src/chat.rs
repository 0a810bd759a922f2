//! State machine behind the chat widget.
//!
//! The widget component keeps a [`ChatState`] in a signal. A send is split in
//! two halves around the network call: [`ChatState::begin_send`] validates and
//! records the user message, [`PendingReply::dispatch`] awaits the service
//! without holding any borrow of the state, and [`ChatState::complete`]
//! applies the outcome.

use api::inference::ChatSession;
use api::inference::InferenceError;
use api::inference::InferenceService;
use api::locale::get_locale;
use api::locale::LanguageCode;
use dioxus_logger::tracing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPhase {
    Closed,
    OpenIdle,
    OpenAwaiting,
}

pub struct ChatState<S> {
    language: LanguageCode,
    session: S,
    /// Bumped on every session replacement; replies carry the epoch they were sent in.
    epoch: u64,
    messages: Vec<ChatMessage>,
    input: String,
    is_open: bool,
    awaiting: bool,
}

/// A send that has been accepted and must now be dispatched to the service.
pub struct PendingReply<S> {
    epoch: u64,
    session: S,
    text: String,
}

/// The outcome of a dispatched send, ready to be applied.
pub struct Reply {
    epoch: u64,
    result: Result<String, InferenceError>,
}

impl<S: ChatSession + Clone> PendingReply<S> {
    pub async fn dispatch(self) -> Reply {
        let result = self.session.send(&self.text).await;
        Reply {
            epoch: self.epoch,
            result,
        }
    }
}

impl<S: ChatSession + Clone> ChatState<S> {
    /// Creates a closed widget for `language` with a freshly seeded session.
    pub fn new<I>(service: &I, language: LanguageCode) -> Self
    where
        I: InferenceService<Session = S>,
    {
        let locale = get_locale(language);
        Self {
            language,
            session: service.create_session(&locale.chat_system_instruction()),
            epoch: 0,
            messages: vec![ChatMessage::assistant(locale.chat.welcome)],
            input: String::new(),
            is_open: false,
            awaiting: false,
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    pub fn phase(&self) -> ChatPhase {
        match (self.is_open, self.awaiting) {
            (false, _) => ChatPhase::Closed,
            (true, false) => ChatPhase::OpenIdle,
            (true, true) => ChatPhase::OpenAwaiting,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the widget. An in-flight reply still lands in the log.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Switches to `language`: the old session is discarded and returned, a
    /// new one is seeded with the language's system instruction, and the log
    /// restarts from that language's welcome message.
    pub fn switch_language<I>(&mut self, service: &I, language: LanguageCode) -> S
    where
        I: InferenceService<Session = S>,
    {
        let locale = get_locale(language);
        let session = service.create_session(&locale.chat_system_instruction());
        let old = std::mem::replace(&mut self.session, session);

        self.language = language;
        self.epoch += 1;
        self.awaiting = false;
        self.messages = vec![ChatMessage::assistant(locale.chat.welcome)];
        tracing::debug!("chat session reset for language {}", language);
        old
    }

    /// Accepts the current input for sending. Returns `None`, changing
    /// nothing, when the input is blank or a reply is already awaited.
    pub fn begin_send(&mut self) -> Option<PendingReply<S>> {
        if self.awaiting || self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.awaiting = true;

        Some(PendingReply {
            epoch: self.epoch,
            session: self.session.clone(),
            text,
        })
    }

    /// Applies a reply. Replies from a discarded session are dropped and
    /// `false` is returned.
    pub fn complete(&mut self, reply: Reply) -> bool {
        if reply.epoch != self.epoch {
            tracing::debug!("dropping chat reply from a discarded session");
            return false;
        }

        let chat = &get_locale(self.language).chat;
        let text = match reply.result {
            Ok(text) if text.trim().is_empty() => chat.empty_reply.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!("chat error: {}", e);
                chat.error.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(text));
        self.awaiting = false;
        true
    }
}
