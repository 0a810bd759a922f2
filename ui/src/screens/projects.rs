//=============================================================================
// File: src/screens/projects.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::section_heading::SectionHeading;
use dioxus::prelude::*;

/// Cover images for the case studies, in catalog order.
const PROJECT_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1556740758-90de374c12ad?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=800",
];

#[component]
pub fn ProjectsScreen() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let projects = &app_state_mut.locale().projects;

    rsx! {
        section {
            Container {
                SectionHeading {
                    title: "{projects.title}",
                    sub: "{projects.sub}",
                }
                Grid {
                    for (project, image) in projects.items.iter().zip(PROJECT_IMAGES) {
                        Card {
                            img {
                                class: "project-image",
                                src: image,
                                alt: project.title,
                                loading: "lazy",
                            }
                            small { class: "project-category", "{project.cat}" }
                            h4 { "{project.title}" }
                            p { "{project.desc}" }
                        }
                    }
                }
            }
        }
    }
}
