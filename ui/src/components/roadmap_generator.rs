// File: src/components/roadmap_generator.rs
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::roadmap::RoadmapState;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// One-shot "AI roadmap" panel: a business description in, three strategies out.
#[component]
pub fn RoadmapGenerator() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut roadmap = use_signal(RoadmapState::default);

    let copy = &app_state_mut.locale().roadmap;
    let inference = app_state.inference;

    let mut generate = move || {
        let language = app_state_mut.prefs.peek().language();
        let request = roadmap.write().begin(language);
        if let Some(request) = request {
            spawn(async move {
                let outcome = request.dispatch(&inference).await;
                roadmap.write().complete(outcome);
            });
        }
    };

    let state = roadmap.read();
    let can_generate = !state.is_loading() && !state.input().trim().is_empty();

    rsx! {
        Card {
            h3 { "{copy.title}" }
            p { class: "muted", "{copy.desc}" }
            div {
                role: "group",
                input {
                    r#type: "text",
                    placeholder: copy.placeholder,
                    value: "{state.input()}",
                    oninput: move |evt| roadmap.write().set_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            generate();
                        }
                    },
                }
                Button {
                    disabled: !can_generate,
                    on_click: move |_| generate(),
                    if state.is_loading() {
                        "{copy.waiting}"
                    } else {
                        "{copy.btn}"
                    }
                }
            }
            if state.is_loading() {
                progress {}
            }
            if let Some(result) = state.result() {
                div {
                    class: "roadmap-result",
                    h4 { "{copy.result}" }
                    p { class: "pre-wrap", "{result}" }
                }
            }
        }
    }
}
