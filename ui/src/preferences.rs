//! Session-scoped user preferences: language, theme and demo-modal visibility.

use api::locale::get_locale;
use api::locale::LanguageCode;
use api::locale::LocaleContent;
use api::locale::TextDirection;
use api::prefs::theme_mode::ThemeMode;
use api::prefs::user_prefs::UserPrefs;

/// The mutable preference state. One instance per running app, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PreferenceState {
    language: LanguageCode,
    theme: ThemeMode,
    demo_modal_open: bool,
}

/// Attributes the document root must carry for the current preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: TextDirection,
    pub lang: LanguageCode,
    pub theme: ThemeMode,
}

impl From<UserPrefs> for PreferenceState {
    fn from(prefs: UserPrefs) -> Self {
        Self {
            language: prefs.language(),
            theme: prefs.theme(),
            demo_modal_open: false,
        }
    }
}

impl PreferenceState {
    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn locale(&self) -> &'static LocaleContent {
        get_locale(self.language)
    }

    pub fn is_demo_modal_open(&self) -> bool {
        self.demo_modal_open
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn open_demo_modal(&mut self) {
        self.demo_modal_open = true;
    }

    pub fn close_demo_modal(&mut self) {
        self.demo_modal_open = false;
    }

    pub fn document_attributes(&self) -> DocumentAttributes {
        DocumentAttributes {
            dir: self.locale().dir,
            lang: self.language,
            theme: self.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_locale_dark_and_closed() {
        let prefs = PreferenceState::default();
        assert_eq!(prefs.language(), LanguageCode::Fa);
        assert_eq!(prefs.theme(), ThemeMode::Dark);
        assert!(!prefs.is_demo_modal_open());
    }

    #[test]
    fn language_toggle_is_an_involution() {
        for start in LanguageCode::ALL {
            let mut prefs = PreferenceState::from(UserPrefs::new(start, ThemeMode::Light));
            prefs.toggle_language();
            assert_ne!(prefs.language(), start);
            prefs.toggle_language();
            assert_eq!(prefs.language(), start);
        }
    }

    #[test]
    fn theme_round_trip_changes_nothing_else() {
        let mut prefs = PreferenceState::default();
        prefs.open_demo_modal();
        let before = prefs;

        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Light);
        assert_eq!(prefs.language(), before.language());
        assert!(prefs.is_demo_modal_open());

        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Dark);
        assert_eq!(prefs, before);
    }

    #[test]
    fn document_attributes_follow_the_language() {
        let mut prefs = PreferenceState::default();
        let attrs = prefs.document_attributes();
        assert_eq!(attrs.dir, TextDirection::Rtl);
        assert_eq!(attrs.lang, LanguageCode::Fa);

        prefs.toggle_language();
        let attrs = prefs.document_attributes();
        assert_eq!(attrs.dir, TextDirection::Ltr);
        assert_eq!(attrs.lang, LanguageCode::En);
        assert_eq!(attrs.dir, prefs.locale().dir);
    }

    #[test]
    fn demo_modal_opens_and_closes() {
        let mut prefs = PreferenceState::default();
        prefs.open_demo_modal();
        prefs.open_demo_modal();
        assert!(prefs.is_demo_modal_open());
        prefs.close_demo_modal();
        assert!(!prefs.is_demo_modal_open());
    }
}
