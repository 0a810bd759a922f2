// This file makes the screen modules available to the rest of the application.

pub mod about;
pub mod home;
pub mod projects;
pub mod services;

use crate::compat;
use api::locale::NavCopy;
use dioxus::prelude::*;

/// The site's top-level pages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Home,
    Services,
    Projects,
    About,
}

/// A list of all available screens, in navigation order.
pub const ALL_SCREENS: [Screen; 4] = [
    Screen::Home,
    Screen::Services,
    Screen::Projects,
    Screen::About,
];

impl Screen {
    /// The navigation label for this screen in the active language.
    pub fn name(&self, nav: &NavCopy) -> &'static str {
        match self {
            Screen::Home => nav.home,
            Screen::Services => nav.services,
            Screen::Projects => nav.projects,
            Screen::About => nav.about,
        }
    }
}

/// Switches the visible page and starts it from the top.
pub fn navigate(mut active_screen: Signal<Screen>, screen: Screen) {
    active_screen.set(screen);
    compat::scroll_to_top();
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::locale::get_locale;
    use api::locale::LanguageCode;

    #[test]
    fn every_screen_has_a_label_in_every_language() {
        for code in LanguageCode::ALL {
            let nav = &get_locale(code).nav;
            let names: Vec<_> = ALL_SCREENS.iter().map(|s| s.name(nav)).collect();
            assert!(names.iter().all(|n| !n.is_empty()));
            assert_eq!(names[0], nav.home);
        }
        assert_eq!(Screen::default(), Screen::Home);
    }
}
