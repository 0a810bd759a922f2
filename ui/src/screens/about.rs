//=============================================================================
// File: src/screens/about.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::section_heading::SectionHeading;
use dioxus::prelude::*;

#[component]
pub fn AboutScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let about = &app_state_mut.locale().about;

    rsx! {
        section {
            Container {
                SectionHeading {
                    title: "{about.title}",
                    sub: "{about.sub}",
                }
                Card {
                    p { class: "lead", "{about.desc}" }
                    ul {
                        class: "values",
                        for value in about.values.iter() {
                            li { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
