pub mod theme_mode;
pub mod user_prefs;
