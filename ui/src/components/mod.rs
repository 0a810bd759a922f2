//! Shared building blocks: the Pico-style primitives and the site's chrome,
//! widgets and modals built on them.
pub mod chat_widget;
pub mod demo_modal;
pub mod footer;
pub mod navbar;
pub mod pico;
pub mod roadmap_generator;
pub mod section_heading;
