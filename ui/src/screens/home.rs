//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::section_heading::SectionHeading;
use crate::screens::navigate;
use crate::screens::Screen;
use dioxus::prelude::*;

/// Client organisations shown in the partners strip. Names are brand names
/// and are not translated.
pub const PARTNERS: [(&str, &str); 5] = [
    ("Cosar Pharmacy", "https://www.cosar-co.com"),
    ("Bazar Ahan", "https://www.bazareahan.com"),
    ("Kalachi", "https://www.kalachi.ir"),
    ("Azimzade Holding", "https://www.azimzade.com"),
    ("Kiamehrrayan", "https://www.kiamehrrayan.com"),
];

#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        Hero {}
        Partners {}
        Features {}
        Process {}
    }
}

#[component]
fn Hero() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();
    let hero = &app_state_mut.locale().hero;

    rsx! {
        section {
            class: "hero",
            Container {
                p { class: "hero-label", "{hero.label}" }
                h1 {
                    "{hero.title1}"
                    br {}
                    span { class: "accent", "{hero.title2}" }
                }
                p { class: "lead", "{hero.desc}" }
                Button {
                    on_click: move |_| navigate(active_screen, Screen::Services),
                    "{hero.cta}"
                }
                ul {
                    class: "hero-stats",
                    for stat in hero.stats.iter() {
                        li { "{stat}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Partners() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let title = app_state_mut.locale().partners.title;

    rsx! {
        section {
            class: "partners",
            Container {
                p { class: "partners-title", "{title}" }
                div {
                    class: "partners-strip",
                    for (name, url) in PARTNERS {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Features() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let features = &app_state_mut.locale().features;

    rsx! {
        section {
            Container {
                SectionHeading {
                    title: "{features.title}",
                    sub: "{features.sub}",
                }
                Grid {
                    for item in features.items.iter() {
                        Card {
                            h4 { "{item.title}" }
                            p { "{item.desc}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Process() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let process = &app_state_mut.locale().process;

    rsx! {
        section {
            Container {
                SectionHeading {
                    title: "{process.title}",
                    sub: "{process.sub}",
                    centered: true,
                }
                ol {
                    class: "process-steps",
                    for (i, step) in process.items.iter().enumerate() {
                        li {
                            span { class: "step-number", {format!("{:02}", i + 1)} }
                            h4 { "{step.title}" }
                            p { "{step.desc}" }
                        }
                    }
                }
            }
        }
    }
}
