// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use crate::preferences::DocumentAttributes;
    use dioxus_logger::tracing;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Writes `dir`, `lang` and the theme onto `<html>`.
    pub fn apply_document_attributes(attrs: DocumentAttributes) {
        let Some(root) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        else {
            tracing::warn!("no document element; skipping attribute sync");
            return;
        };

        let pairs = [
            ("dir", attrs.dir.as_str()),
            ("lang", attrs.lang.code()),
            ("data-theme", attrs.theme.as_str()),
        ];
        for (name, value) in pairs {
            if let Err(e) = root.set_attribute(name, value) {
                tracing::warn!("failed to set {}: {:?}", name, e);
            }
        }
        if let Err(e) = root
            .class_list()
            .toggle_with_force("dark", attrs.theme.is_dark())
        {
            tracing::warn!("failed to toggle dark class: {:?}", e);
        }
    }

    pub fn scroll_to_top() {
        match web_sys::window() {
            Some(win) => win.scroll_to_with_x_and_y(0.0, 0.0),
            None => tracing::warn!("no window; cannot scroll"),
        }
    }

    /// Navigates to a `mailto:` URI so the user's mail client takes over.
    pub fn open_mail_handoff(uri: &str) {
        match web_sys::window() {
            Some(win) => {
                if let Err(e) = win.location().set_href(uri) {
                    tracing::error!("mail hand-off failed: {:?}", e);
                }
            }
            None => tracing::error!("mail hand-off failed: no window"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use crate::preferences::DocumentAttributes;
    use dioxus::prelude::*;
    use dioxus_logger::tracing;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Runs `js` in the webview and logs a failure. Scripts end in `return true;`.
    fn run_script(what: &'static str, js: String) {
        let eval = document::eval(&js);
        spawn(async move {
            if let Err(e) = eval.join::<bool>().await {
                tracing::warn!("{} failed: {:?}", what, e);
            }
        });
    }

    fn attributes_script(attrs: DocumentAttributes) -> String {
        format!(
            r#"const root = document.documentElement;
root.setAttribute("dir", "{dir}");
root.setAttribute("lang", "{lang}");
root.setAttribute("data-theme", "{theme}");
root.classList.toggle("dark", {dark});
return true;"#,
            dir = attrs.dir.as_str(),
            lang = attrs.lang.code(),
            theme = attrs.theme.as_str(),
            dark = attrs.theme.is_dark(),
        )
    }

    const SCROLL_TO_TOP_SCRIPT: &str = "window.scrollTo(0, 0);\nreturn true;";

    fn mail_handoff_script(uri: &str) -> Result<String, serde_json::Error> {
        let quoted = serde_json::to_string(uri)?;
        Ok(format!("window.location.href = {};\nreturn true;", quoted))
    }

    /// Writes `dir`, `lang` and the theme onto `<html>`.
    pub fn apply_document_attributes(attrs: DocumentAttributes) {
        run_script("document attribute sync", attributes_script(attrs));
    }

    pub fn scroll_to_top() {
        run_script("scroll to top", SCROLL_TO_TOP_SCRIPT.to_string());
    }

    /// Navigates to a `mailto:` URI so the user's mail client takes over.
    pub fn open_mail_handoff(uri: &str) {
        match mail_handoff_script(uri) {
            Ok(js) => run_script("mail hand-off", js),
            Err(e) => tracing::error!("mail hand-off failed: {}", e),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::preferences::PreferenceState;

        #[test]
        fn attribute_script_follows_the_preferences() {
            let mut prefs = PreferenceState::default();
            let js = attributes_script(prefs.document_attributes());
            assert!(js.contains(r#"setAttribute("dir", "rtl")"#));
            assert!(js.contains(r#"setAttribute("lang", "fa")"#));
            assert!(js.contains(r#"setAttribute("data-theme", "dark")"#));
            assert!(js.contains(r#"toggle("dark", true)"#));

            prefs.toggle_language();
            prefs.toggle_theme();
            let js = attributes_script(prefs.document_attributes());
            assert!(js.contains(r#"setAttribute("dir", "ltr")"#));
            assert!(js.contains(r#"toggle("dark", false)"#));
        }

        #[test]
        fn scripts_report_completion() {
            let attrs = PreferenceState::default().document_attributes();
            assert!(attributes_script(attrs).ends_with("return true;"));
            assert!(SCROLL_TO_TOP_SCRIPT.starts_with("window.scrollTo(0, 0);"));
            assert!(SCROLL_TO_TOP_SCRIPT.ends_with("return true;"));
        }

        #[test]
        fn mail_script_quotes_the_uri() {
            let js = mail_handoff_script("mailto:a@b.c?subject=x%22y&body=\"quoted\"").unwrap();
            assert_eq!(
                js,
                "window.location.href = \"mailto:a@b.c?subject=x%22y&body=\\\"quoted\\\"\";\nreturn true;"
            );
        }
    }
}
