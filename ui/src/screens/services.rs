//=============================================================================
// File: src/screens/services.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::roadmap_generator::RoadmapGenerator;
use crate::components::section_heading::SectionHeading;
use dioxus::prelude::*;

#[component]
pub fn ServicesScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let services = &app_state_mut.locale().services;

    rsx! {
        section {
            Container {
                SectionHeading {
                    title: "{services.title}",
                    sub: "{services.sub}",
                }
                Grid {
                    for (i, service) in services.items.iter().enumerate() {
                        Card {
                            span { class: "step-number", {format!("{:02}", i + 1)} }
                            h4 { "{service.title}" }
                            p { "{service.desc}" }
                        }
                    }
                }
                RoadmapGenerator {}
            }
        }
    }
}
