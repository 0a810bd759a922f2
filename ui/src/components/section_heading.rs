// File: src/components/section_heading.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct SectionHeadingProps {
    title: String,
    #[props(default)]
    sub: Option<String>,
    #[props(default = false)]
    centered: bool,
}

/// A section title with an optional subtitle underneath or beside it.
#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let class = if props.centered {
        "section-heading centered"
    } else {
        "section-heading"
    };

    rsx! {
        div {
            class: "{class}",
            h2 { "{props.title}" }
            if let Some(sub) = props.sub {
                p { class: "muted", "{sub}" }
            }
        }
    }
}
