// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod chat;
pub mod compat;
mod components;
pub mod lead;
pub mod preferences;
pub mod roadmap;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::chat_widget::ChatWidget;
use components::demo_modal::DemoModal;
use components::footer::Footer;
use components::navbar::Navbar;
use preferences::PreferenceState;
use screens::about::AboutScreen;
use screens::home::HomeScreen;
use screens::projects::ProjectsScreen;
use screens::services::ServicesScreen;
use screens::Screen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Rastinax" }
        document::Stylesheet {
            href: asset!("/assets/css/site.css"),
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_prefs = use_server_future(api::get_user_prefs)?;

    // Read from the future to ensure it's polled during SSR.
    let body = match &*initial_prefs.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:?}", prefs);
            rsx! {
                LoadedApp {
                    app_state: AppState::new(lead::LEAD_MAIL_RECIPIENT),
                    user_prefs: *prefs,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState, user_prefs: UserPrefs) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let prefs_signal = use_signal(|| PreferenceState::from(user_prefs));
    let app_state_mut = use_context_provider(|| AppStateMut {
        prefs: prefs_signal,
    });

    // Effects never run during SSR; this brings the live document in line
    // with the starting preferences once mounted.
    use_effect(move || app_state_mut.sync_document());

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    let attrs = app_state_mut.prefs.read().document_attributes();

    rsx! {
        div {
            class: "app-root",
            dir: attrs.dir.as_str(),
            lang: attrs.lang.code(),
            "data-theme": attrs.theme.as_str(),
            Navbar {}
            main {
                class: "content",
                match active_screen() {
                    Screen::Home => rsx! {
                        HomeScreen {}
                    },
                    Screen::Services => rsx! {
                        ServicesScreen {}
                    },
                    Screen::Projects => rsx! {
                        ProjectsScreen {}
                    },
                    Screen::About => rsx! {
                        AboutScreen {}
                    },
                }
            }
            Footer {}
            ChatWidget {}
            DemoModal {}
        }
    }
}
