//! The localized content catalog.
//!
//! Every supported [`LanguageCode`] maps to one `'static` [`LocaleContent`]
//! tree. The tree is a plain struct so a missing key in one language is a
//! compile error; list lengths and record shapes are checked by the parity
//! tests in `tests/locale_parity.rs`.

mod en;
mod fa;

use serde::Deserialize;
use serde::Serialize;

/// A supported site language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LanguageCode {
    /// Persian, the primary locale.
    #[default]
    Fa,
    En,
}

impl LanguageCode {
    /// All supported languages, primary locale first.
    pub const ALL: [LanguageCode; 2] = [LanguageCode::Fa, LanguageCode::En];

    /// The BCP 47 tag written to the document's `lang` attribute.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The other supported language. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            LanguageCode::Fa => LanguageCode::En,
            LanguageCode::En => LanguageCode::Fa,
        }
    }

    /// The natural writing direction of this language.
    pub fn natural_direction(&self) -> TextDirection {
        match self {
            LanguageCode::Fa => TextDirection::Rtl,
            LanguageCode::En => TextDirection::Ltr,
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Returns the content tree for `code`. Total over the closed set of languages.
pub fn get_locale(code: LanguageCode) -> &'static LocaleContent {
    match code {
        LanguageCode::Fa => &fa::FA,
        LanguageCode::En => &en::EN,
    }
}

/// A title/description pair, used by feature, step and service lists.
#[derive(Debug, PartialEq, Serialize)]
pub struct Item {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ProjectItem {
    pub title: &'static str,
    pub cat: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NavCopy {
    pub home: &'static str,
    pub services: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub cta: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroCopy {
    pub label: &'static str,
    pub title1: &'static str,
    pub title2: &'static str,
    pub desc: &'static str,
    pub cta: &'static str,
    pub stats: &'static [&'static str],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PartnersCopy {
    pub title: &'static str,
}

/// A heading, subtitle and item list. Shared by features, process and services.
#[derive(Debug, PartialEq, Serialize)]
pub struct ItemSection {
    pub title: &'static str,
    pub sub: &'static str,
    pub items: &'static [Item],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ProjectsCopy {
    pub title: &'static str,
    pub sub: &'static str,
    pub items: &'static [ProjectItem],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AboutCopy {
    pub title: &'static str,
    pub sub: &'static str,
    pub desc: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RoadmapCopy {
    pub title: &'static str,
    pub desc: &'static str,
    pub placeholder: &'static str,
    pub btn: &'static str,
    pub result: &'static str,
    pub waiting: &'static str,
    pub error: &'static str,
    pub empty: &'static str,
    /// Name of the language the strategies should be written in.
    pub answer_language: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LeadFieldLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub province: &'static str,
    pub mobile: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DemoModalCopy {
    pub title: &'static str,
    pub desc: &'static str,
    pub fields: LeadFieldLabels,
    pub submit: &'static str,
    pub cancel: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FooterCopy {
    pub desc: &'static str,
    pub contact: &'static str,
    pub links: &'static str,
    pub copy: &'static str,
    pub addr_tehran_label: &'static str,
    pub addr_tehran: &'static str,
    pub addr_karaj_label: &'static str,
    pub addr_karaj: &'static str,
    pub phone_karaj_label: &'static str,
    pub consult_label: &'static str,
    pub whatsapp_label: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ChatCopy {
    pub welcome: &'static str,
    pub placeholder: &'static str,
    pub thinking: &'static str,
    pub title: &'static str,
    pub online: &'static str,
    pub role_prompt: &'static str,
    /// Appended to `role_prompt` to form the system instruction.
    pub service_summary: &'static str,
    pub error: &'static str,
    pub empty_reply: &'static str,
    pub open_label: &'static str,
    pub close_label: &'static str,
}

/// The full translated content of the site for one language.
#[derive(Debug, PartialEq, Serialize)]
pub struct LocaleContent {
    pub dir: TextDirection,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub partners: PartnersCopy,
    pub features: ItemSection,
    pub process: ItemSection,
    pub services: ItemSection,
    pub projects: ProjectsCopy,
    pub about: AboutCopy,
    pub roadmap: RoadmapCopy,
    pub demo_modal: DemoModalCopy,
    pub footer: FooterCopy,
    pub chat: ChatCopy,
}

impl LocaleContent {
    /// The system instruction a chat session in this language is seeded with.
    pub fn chat_system_instruction(&self) -> String {
        format!("{} {}", self.chat.role_prompt, self.chat.service_summary)
    }

    /// Builds the one-shot roadmap prompt for `business`.
    pub fn roadmap_prompt(&self, business: &str) -> String {
        format!(
            "Act as a senior AI Consultant for business: \"{}\". Provide 3 high-impact AI strategies in {}. Format: Bullet points.",
            business, self.roadmap.answer_language
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn toggled_is_an_involution() {
        for code in LanguageCode::ALL {
            assert_ne!(code.toggled(), code);
            assert_eq!(code.toggled().toggled(), code);
        }
    }

    #[test]
    fn direction_matches_language() {
        for code in LanguageCode::ALL {
            assert_eq!(get_locale(code).dir, code.natural_direction());
        }
        assert!(get_locale(LanguageCode::Fa).dir.is_rtl());
    }

    #[test]
    fn language_codes_parse_and_print() {
        assert_eq!(LanguageCode::from_str("FA").unwrap(), LanguageCode::Fa);
        assert_eq!(LanguageCode::from_str("en").unwrap(), LanguageCode::En);
        assert!(LanguageCode::from_str("de").is_err());
        assert_eq!(LanguageCode::En.to_string(), "en");
        assert_eq!(serde_json::to_string(&LanguageCode::Fa).unwrap(), "\"fa\"");
    }

    #[test]
    fn roadmap_prompt_embeds_input_and_language() {
        let prompt = get_locale(LanguageCode::Fa).roadmap_prompt("Banking");
        assert!(prompt.contains("\"Banking\""));
        assert!(prompt.ends_with("in Persian. Format: Bullet points."));

        let prompt = get_locale(LanguageCode::En).roadmap_prompt("Retail");
        assert!(prompt.contains("in English."));
    }

    #[test]
    fn system_instruction_is_language_specific() {
        let fa = get_locale(LanguageCode::Fa).chat_system_instruction();
        let en = get_locale(LanguageCode::En).chat_system_instruction();
        assert_ne!(fa, en);
        assert!(fa.contains("formal Persian"));
        assert!(en.contains("021-91322922"));
    }
}
