//! Defines the mutable, reactive state for the application's UI.

use crate::compat;
use crate::preferences::PreferenceState;
use api::locale::LanguageCode;
use api::locale::LocaleContent;
use api::prefs::theme_mode::ThemeMode;
use dioxus::prelude::*;
use dioxus_logger::tracing;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Reading through the accessors subscribes the calling component, so a
/// language switch re-renders every consumer with the new locale. The
/// toggles also rewrite the document root's `dir`, `lang` and theme before
/// returning.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub prefs: Signal<PreferenceState>,
}

impl AppStateMut {
    pub fn locale(&self) -> &'static LocaleContent {
        self.prefs.read().locale()
    }

    pub fn language(&self) -> LanguageCode {
        self.prefs.read().language()
    }

    pub fn theme(&self) -> ThemeMode {
        self.prefs.read().theme()
    }

    pub fn is_demo_modal_open(&self) -> bool {
        self.prefs.read().is_demo_modal_open()
    }

    pub fn toggle_language(&mut self) {
        self.prefs.write().toggle_language();
        self.sync_document();
        tracing::debug!("language switched to {}", self.prefs.peek().language());
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.write().toggle_theme();
        self.sync_document();
        tracing::debug!("theme switched to {}", self.prefs.peek().theme().as_str());
    }

    pub fn open_demo_modal(&mut self) {
        self.prefs.write().open_demo_modal();
    }

    pub fn close_demo_modal(&mut self) {
        self.prefs.write().close_demo_modal();
    }

    /// Pushes the current preferences onto the document root without subscribing.
    pub fn sync_document(&self) {
        compat::apply_document_attributes(self.prefs.peek().document_attributes());
    }
}
