//! The demo-request form draft and its `mailto:` hand-off.

use api::locale::LeadFieldLabels;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use std::time::Duration;

/// Where demo requests are mailed. Overridable at build time.
pub const LEAD_MAIL_RECIPIENT: &str = match option_env!("LEAD_MAIL_RECIPIENT") {
    Some(recipient) => recipient,
    None => "icenet.online@gmail.com",
};

/// How long the modal stays up after the hand-off so the mail client can open.
pub const HANDOFF_CLOSE_DELAY: Duration = Duration::from_millis(1000);

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
    Company,
    Province,
    Mobile,
}

impl LeadField {
    /// The `<input type>` used for this field.
    pub fn input_type(&self) -> &'static str {
        match self {
            LeadField::Email => "email",
            LeadField::Mobile => "tel",
            _ => "text",
        }
    }

    pub fn label(&self, labels: &LeadFieldLabels) -> &'static str {
        match self {
            LeadField::Name => labels.name,
            LeadField::Email => labels.email,
            LeadField::Company => labels.company,
            LeadField::Province => labels.province,
            LeadField::Mobile => labels.mobile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("required field `{0}` is empty")]
    MissingField(LeadField),

    #[error("a hand-off is already in progress")]
    HandoffPending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormDraft {
    name: String,
    email: String,
    company: String,
    province: String,
    mobile: String,
}

impl LeadFormDraft {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::Province => &self.province,
            LeadField::Mobile => &self.mobile,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Company => &mut self.company,
            LeadField::Province => &mut self.province,
            LeadField::Mobile => &mut self.mobile,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The first blank field, in form order.
    pub fn first_missing(&self) -> Option<LeadField> {
        use strum::IntoEnumIterator;
        LeadField::iter().find(|field| self.get(*field).trim().is_empty())
    }

    pub fn subject(&self) -> String {
        format!("Rastinax Demo Request: {}", self.company)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nProvince: {}\nMobile: {}\n",
            self.name, self.email, self.company, self.province, self.mobile
        )
    }

    /// Builds the `mailto:` URI for `recipient`. Refuses while any field is blank.
    pub fn handoff(&self, recipient: &str) -> Result<String, LeadError> {
        if let Some(field) = self.first_missing() {
            return Err(LeadError::MissingField(field));
        }

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body())
        ))
    }
}

/// Identifies one hand-off. Stale once the form has been reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandoffTicket(u64);

/// The modal's form: the draft plus the pending hand-off, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    draft: LeadFormDraft,
    /// Bumped on every reset; tickets from earlier generations are ignored.
    generation: u64,
    handing_off: bool,
}

impl LeadForm {
    pub fn draft(&self) -> &LeadFormDraft {
        &self.draft
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn is_handing_off(&self) -> bool {
        self.handing_off
    }

    /// Builds the `mailto:` URI and the ticket its delayed close must present.
    pub fn begin_handoff(&mut self, recipient: &str) -> Result<(String, HandoffTicket), LeadError> {
        if self.handing_off {
            return Err(LeadError::HandoffPending);
        }
        let uri = self.draft.handoff(recipient)?;
        self.handing_off = true;
        Ok((uri, HandoffTicket(self.generation)))
    }

    /// Clears the draft and invalidates any pending hand-off.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.handing_off = false;
        self.generation += 1;
    }

    /// Completes the hand-off `ticket` belongs to. Returns `false`, changing
    /// nothing, when the form was reset since.
    pub fn finish(&mut self, ticket: HandoffTicket) -> bool {
        if ticket != HandoffTicket(self.generation) {
            return false;
        }
        self.reset();
        true
    }
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn filled() -> LeadFormDraft {
        let mut draft = LeadFormDraft::default();
        draft.set(LeadField::Name, "Sara Ahmadi");
        draft.set(LeadField::Email, "sara+demo@example.com");
        draft.set(LeadField::Company, "Kalachi & Co");
        draft.set(LeadField::Province, "تهران");
        draft.set(LeadField::Mobile, "0912 000 0000");
        draft
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("x+y@z\n"), "x%2By%40z%0A");
        assert_eq!(encode_uri_component("تهران"), "%D8%AA%D9%87%D8%B1%D8%A7%D9%86");
    }

    #[test]
    fn complete_draft_produces_a_mailto_with_every_field() {
        let draft = filled();
        let uri = draft.handoff("leads@example.com").expect("complete draft");

        assert!(uri.starts_with("mailto:leads@example.com?subject="));
        assert!(uri.contains(&format!(
            "subject={}",
            encode_uri_component("Rastinax Demo Request: Kalachi & Co")
        )));
        assert!(uri.contains(&format!("&body={}", encode_uri_component(&draft.body()))));
        for field in LeadField::iter() {
            assert!(
                uri.contains(&encode_uri_component(draft.get(field))),
                "{field} missing from {uri}"
            );
        }
        // exactly one raw '&' separates subject and body
        assert_eq!(uri.matches('&').count(), 1);
    }

    #[test]
    fn body_lists_fields_in_order() {
        assert_eq!(
            filled().body(),
            "Name: Sara Ahmadi\nEmail: sara+demo@example.com\nCompany: Kalachi & Co\nProvince: تهران\nMobile: 0912 000 0000\n"
        );
    }

    #[test]
    fn any_blank_field_blocks_the_handoff() {
        for field in LeadField::iter() {
            let mut draft = filled();
            draft.set(field, "  ");
            assert_eq!(
                draft.handoff(LEAD_MAIL_RECIPIENT),
                Err(LeadError::MissingField(field))
            );
        }
        assert_eq!(
            LeadFormDraft::default().first_missing(),
            Some(LeadField::Name)
        );
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = filled();
        draft.clear();
        assert_eq!(draft, LeadFormDraft::default());
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::default();
        for field in LeadField::iter() {
            form.set(field, filled().get(field));
        }
        form
    }

    #[test]
    fn finishing_the_current_handoff_resets_the_form() {
        let mut form = filled_form();
        let (uri, ticket) = form.begin_handoff(LEAD_MAIL_RECIPIENT).expect("complete form");
        assert_eq!(uri, filled().handoff(LEAD_MAIL_RECIPIENT).unwrap());
        assert!(form.is_handing_off());

        assert!(form.finish(ticket));
        assert!(!form.is_handing_off());
        assert_eq!(form.draft(), &LeadFormDraft::default());
    }

    #[test]
    fn second_submit_while_handing_off_is_refused() {
        let mut form = filled_form();
        form.begin_handoff(LEAD_MAIL_RECIPIENT).unwrap();
        assert_eq!(
            form.begin_handoff(LEAD_MAIL_RECIPIENT),
            Err(LeadError::HandoffPending)
        );
    }

    #[test]
    fn close_timer_from_a_cancelled_handoff_leaves_the_reopened_form_alone() {
        let mut form = filled_form();
        let (_, stale) = form.begin_handoff(LEAD_MAIL_RECIPIENT).unwrap();

        // cancelled inside the close delay, then reopened and filled in again
        form.reset();
        form.set(LeadField::Name, "Reza");

        assert!(!form.finish(stale));
        assert_eq!(form.draft().get(LeadField::Name), "Reza");
        assert!(!form.is_handing_off());
    }

    #[test]
    fn incomplete_form_does_not_start_a_handoff() {
        let mut form = LeadForm::default();
        form.set(LeadField::Name, "Sara");
        assert_eq!(
            form.begin_handoff(LEAD_MAIL_RECIPIENT),
            Err(LeadError::MissingField(LeadField::Email))
        );
        assert!(!form.is_handing_off());
    }

    #[test]
    fn input_types_match_the_fields() {
        assert_eq!(LeadField::Email.input_type(), "email");
        assert_eq!(LeadField::Mobile.input_type(), "tel");
        assert_eq!(LeadField::Company.input_type(), "text");
        assert_eq!(<&'static str>::from(LeadField::Province), "province");
    }
}
