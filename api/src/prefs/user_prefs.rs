use super::theme_mode::ThemeMode;
use crate::locale::LanguageCode;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// The site's starting preferences, delivered to the client before first render.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    language: LanguageCode,
    theme: ThemeMode,
}

impl UserPrefs {
    pub fn new(language: LanguageCode, theme: ThemeMode) -> Self {
        Self { language, theme }
    }

    /// Creates a UserPrefs instance from environment variables,
    /// falling back to the primary locale and the dark theme.
    ///
    /// # Environment Variables (case-insensitive):
    /// - `SITE_LANGUAGE`: "fa" or "en".
    /// - `SITE_THEME`: "dark" or "light".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let language = lookup("SITE_LANGUAGE")
            .and_then(|s| LanguageCode::from_str(s.trim()).ok())
            .unwrap_or_default();

        let theme = lookup("SITE_THEME")
            .and_then(|s| ThemeMode::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self { language, theme }
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_from(vars: &[(&str, &str)]) -> UserPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_persian_and_dark() {
        let prefs = prefs_from(&[]);
        assert_eq!(prefs.language(), LanguageCode::Fa);
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }

    #[test]
    fn reads_overrides_case_insensitively() {
        let prefs = prefs_from(&[("SITE_LANGUAGE", "EN"), ("SITE_THEME", " Light ")]);
        assert_eq!(prefs, UserPrefs::new(LanguageCode::En, ThemeMode::Light));
    }

    #[test]
    fn ignores_unknown_values() {
        let prefs = prefs_from(&[("SITE_LANGUAGE", "klingon"), ("SITE_THEME", "sepia")]);
        assert_eq!(prefs, UserPrefs::new(LanguageCode::Fa, ThemeMode::Dark));
    }
}
