// File: src/components/navbar.rs
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Container;
use crate::screens::navigate;
use crate::screens::Screen;
use crate::screens::ALL_SCREENS;
use dioxus::prelude::*;

/// Consultation hotline shown in the top bar and the footer.
pub const CONSULT_PHONE: &str = "021-91322922";

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let nav = &app_state_mut.locale().nav;

    rsx! {
        ul {
            class: "tab-menu",
            for screen in ALL_SCREENS {
                li {
                    a {
                        href: "#",
                        class: if active_screen() == screen { "active-tab" } else { "" },
                        "aria-current": if active_screen() == screen { "page" } else { "false" },
                        onclick: move |event| {
                            event.prevent_default();
                            navigate(active_screen, screen);
                        },
                        "{screen.name(nav)}"
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let nav = &app_state_mut.locale().nav;
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                if is_open() { "✕" } else { "≡" }
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in ALL_SCREENS {
                        a {
                            class: if active_screen() == screen { "custom-dropdown-item active-tab" } else { "custom-dropdown-item" },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                navigate(active_screen, screen);
                                is_open.set(false);
                            },
                            "{screen.name(nav)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();

    let nav = &app_state_mut.locale().nav;
    // The toggle advertises the language it switches to.
    let other_language = app_state_mut.language().toggled().code().to_uppercase();
    let theme_icon = if app_state_mut.theme().is_dark() { "☀" } else { "☾" };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "top-bar",
                span { dir: "ltr", "☎ {CONSULT_PHONE}" }
                span { class: "tagline", "{nav.tagline}" }
            }
            Container {
                nav {
                    ul {
                        li {
                            HamburgerMenu { active_screen }
                        }
                        li {
                            a {
                                class: "brand",
                                href: "#",
                                onclick: move |event| {
                                    event.prevent_default();
                                    navigate(active_screen, Screen::Home);
                                },
                                strong { "RASTINAX" }
                            }
                        }
                    }
                    Tabs { active_screen }
                    ul {
                        li {
                            Button {
                                button_type: ButtonType::Contrast,
                                outline: true,
                                on_click: move |_| app_state_mut.toggle_language(),
                                "{other_language}"
                            }
                        }
                        li {
                            Button {
                                button_type: ButtonType::Contrast,
                                outline: true,
                                aria_label: "theme".to_string(),
                                on_click: move |_| app_state_mut.toggle_theme(),
                                "{theme_icon}"
                            }
                        }
                        li {
                            Button {
                                on_click: move |_| app_state_mut.open_demo_modal(),
                                "{nav.cta}"
                            }
                        }
                    }
                }
            }
        }
    }
}
