// File: src/components/demo_modal.rs
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::lead::LeadField;
use crate::lead::LeadForm;
use crate::lead::HANDOFF_CLOSE_DELAY;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use strum::IntoEnumIterator;

/// The "Request Demo" form. Submitting hands the request to the user's mail
/// client; nothing is sent from the site itself.
#[component]
pub fn DemoModal() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut lead_form = use_signal(LeadForm::default);

    let copy = &app_state_mut.locale().demo_modal;
    let lead_recipient = app_state.lead_recipient;

    let mut close = move || {
        lead_form.write().reset();
        app_state_mut.close_demo_modal();
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let handoff = lead_form.write().begin_handoff(lead_recipient);
        match handoff {
            Ok((uri, ticket)) => {
                tracing::info!("handing demo request off to the mail client");
                compat::open_mail_handoff(&uri);
                spawn(async move {
                    compat::sleep(HANDOFF_CLOSE_DELAY).await;
                    // a cancel in the meantime makes the ticket stale
                    if lead_form.write().finish(ticket) {
                        app_state_mut.close_demo_modal();
                    }
                });
            }
            Err(e) => tracing::warn!("demo request not handed off: {}", e),
        }
    };

    rsx! {
        Modal {
            is_open: app_state_mut.is_demo_modal_open(),
            title: "{copy.title}",
            on_close: move |_| close(),
            p { class: "muted", "{copy.desc}" }
            form {
                onsubmit: submit,
                for field in LeadField::iter() {
                    Input {
                        key: "{field}",
                        label: "{field.label(&copy.fields)}",
                        name: "{field}",
                        input_type: "{field.input_type()}",
                        value: "{lead_form.read().draft().get(field)}",
                        required: true,
                        on_input: move |value: String| lead_form.write().set(field, value),
                    }
                }
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| close(),
                        "{copy.cancel}"
                    }
                    Button {
                        html_type: "submit".to_string(),
                        disabled: lead_form.read().is_handing_off(),
                        "{copy.submit}"
                    }
                }
            }
        }
    }
}
