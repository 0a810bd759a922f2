//! A set of reusable, lifetime-free Dioxus components for the Pico-style markup
//! the site stylesheet targets.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { div { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// `type` attribute; `"submit"` inside forms.
    #[props(default = "button".to_string())]
    html_type: String,
    #[props(optional)]
    aria_label: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, props.button_type.to_class()) {
        (true, "") => "outline".to_string(),
        (true, class) => format!("{class} outline"),
        (false, class) => class.to_string(),
    };
    rsx! {
        button {
            class: "{class_str}",
            r#type: "{props.html_type}",
            "aria-label": props.aria_label.clone(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = false)]
    required: bool,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                required: props.required,
                oninput: move |evt| props.on_input.call(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A titled modal that closes on its close button, a backdrop click or Escape.
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        if props.is_open {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| props.on_close.call(()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.on_close.call(());
                    }
                },
                // The <article> holds the content and keeps clicks inside it
                // from reaching the backdrop.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.on_close.call(());
                            },
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
