// File: src/components/chat_widget.rs
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::chat::ChatPhase;
use crate::chat::ChatRole;
use crate::chat::ChatState;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use std::rc::Rc;

/// The floating assistant. Collapsed to a launcher button until opened.
#[component]
pub fn ChatWidget() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let inference = app_state.inference;

    let mut chat = use_signal(|| ChatState::new(&inference, app_state_mut.prefs.peek().language()));
    let mut log_end = use_signal(|| None::<Rc<MountedData>>);

    // A language switch discards the conversation and seeds a new one.
    use_effect(move || {
        let language = app_state_mut.prefs.read().language();
        if chat.peek().language() != language {
            let old = chat.write().switch_language(&inference, language);
            spawn(async move {
                old.close().await;
            });
        }
    });

    // Keep the newest message in view.
    use_effect(move || {
        let _len = chat.read().messages().len();
        let _awaiting = chat.read().is_awaiting();
        if let Some(end) = log_end.peek().clone() {
            spawn(async move {
                if let Err(e) = end.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("chat scroll failed: {:?}", e);
                }
            });
        }
    });

    let mut send = move || {
        let pending = chat.write().begin_send();
        if let Some(pending) = pending {
            spawn(async move {
                let reply = pending.dispatch().await;
                chat.write().complete(reply);
            });
        }
    };

    let copy = &app_state_mut.locale().chat;
    let state = chat.read();

    rsx! {
        div {
            class: "chat-widget",
            match state.phase() {
                ChatPhase::Closed => rsx! {
                    button {
                        class: "chat-launcher",
                        r#type: "button",
                        "aria-label": copy.open_label,
                        onclick: move |_| chat.write().open(),
                        "💬"
                    }
                },
                phase => rsx! {
                    article {
                        class: "chat-panel",
                        header {
                            div {
                                strong { "{copy.title}" }
                                br {}
                                small { class: "online", "● {copy.online}" }
                            }
                            button {
                                class: "secondary outline",
                                r#type: "button",
                                "aria-label": copy.close_label,
                                onclick: move |_| chat.write().close(),
                                "✕"
                            }
                        }
                        div {
                            class: "chat-log",
                            for message in state.messages().iter() {
                                div {
                                    class: match message.role {
                                        ChatRole::User => "chat-message user",
                                        ChatRole::Assistant => "chat-message assistant",
                                    },
                                    "{message.text}"
                                }
                            }
                            if phase == ChatPhase::OpenAwaiting {
                                div {
                                    class: "chat-message assistant thinking",
                                    "{copy.thinking}"
                                }
                            }
                            div {
                                onmounted: move |evt| log_end.set(Some(evt.data())),
                            }
                        }
                        footer {
                            div {
                                role: "group",
                                input {
                                    r#type: "text",
                                    placeholder: copy.placeholder,
                                    value: "{state.input()}",
                                    oninput: move |evt| chat.write().set_input(evt.value()),
                                    onkeydown: move |evt| {
                                        if evt.key() == Key::Enter {
                                            send();
                                        }
                                    },
                                }
                                button {
                                    r#type: "button",
                                    disabled: phase == ChatPhase::OpenAwaiting || state.input().trim().is_empty(),
                                    onclick: move |_| send(),
                                    "➤"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
