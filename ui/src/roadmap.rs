//! State behind the roadmap generator: one input, one displayed result.

use api::inference::InferenceError;
use api::inference::InferenceService;
use api::locale::get_locale;
use api::locale::LanguageCode;
use dioxus_logger::tracing;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadmapState {
    input: String,
    result: Option<String>,
    loading: bool,
    /// Sequence number of the latest request; older results are ignored.
    latest: u64,
}

/// An accepted generate request.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadmapRequest {
    seq: u64,
    language: LanguageCode,
    prompt: String,
}

pub struct RoadmapOutcome {
    seq: u64,
    language: LanguageCode,
    result: Result<String, InferenceError>,
}

impl RoadmapRequest {
    pub async fn dispatch<I: InferenceService>(self, service: &I) -> RoadmapOutcome {
        let result = service.generate_once(&self.prompt).await;
        RoadmapOutcome {
            seq: self.seq,
            language: self.language,
            result,
        }
    }
}

impl RoadmapState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a request for the current input in `language`. Returns `None`
    /// for blank input or while a request is outstanding.
    pub fn begin(&mut self, language: LanguageCode) -> Option<RoadmapRequest> {
        let business = self.input.trim();
        if business.is_empty() || self.loading {
            return None;
        }

        let prompt = get_locale(language).roadmap_prompt(business);
        self.latest += 1;
        self.loading = true;
        self.result = None;

        Some(RoadmapRequest {
            seq: self.latest,
            language,
            prompt,
        })
    }

    /// Shows the outcome of the latest request. The service's text is shown
    /// as-is; failures show the fixed error string of the request's language.
    pub fn complete(&mut self, outcome: RoadmapOutcome) -> bool {
        if outcome.seq != self.latest {
            return false;
        }

        let copy = &get_locale(outcome.language).roadmap;
        self.result = Some(match outcome.result {
            Ok(text) if text.is_empty() => copy.empty.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!("roadmap generation failed: {}", e);
                copy.error.to_string()
            }
        });
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::inference::testing::FakeInference;

    #[tokio::test]
    async fn success_is_displayed_verbatim() {
        let fake = FakeInference::new();
        let text = "  • Fraud detection\n• *Churn* prediction\n\n";
        fake.push_reply(text);

        let mut roadmap = RoadmapState::default();
        roadmap.set_input("Banking");
        let request = roadmap.begin(LanguageCode::En).expect("accepted");
        assert!(roadmap.is_loading());

        assert!(roadmap.complete(request.dispatch(&fake).await));
        assert_eq!(roadmap.result(), Some(text));
        assert!(!roadmap.is_loading());
    }

    #[tokio::test]
    async fn prompt_embeds_trimmed_input_in_the_active_language() {
        let fake = FakeInference::new();
        fake.push_reply("ok");

        let mut roadmap = RoadmapState::default();
        roadmap.set_input("  Petrochemical ");
        let request = roadmap.begin(LanguageCode::Fa).unwrap();
        roadmap.complete(request.dispatch(&fake).await);

        assert_eq!(
            fake.prompts(),
            vec![get_locale(LanguageCode::Fa).roadmap_prompt("Petrochemical")]
        );
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut roadmap = RoadmapState::default();
        roadmap.set_input("   ");
        assert!(roadmap.begin(LanguageCode::En).is_none());
        assert!(!roadmap.is_loading());
    }

    #[test]
    fn trigger_is_disabled_while_loading() {
        let mut roadmap = RoadmapState::default();
        roadmap.set_input("Retail");
        assert!(roadmap.begin(LanguageCode::En).is_some());
        assert!(roadmap.begin(LanguageCode::En).is_none());
    }

    #[tokio::test]
    async fn failure_shows_the_fixed_error() {
        let fake = FakeInference::new();
        fake.push_failure(InferenceError::Transport("connection reset".to_string()));

        let mut roadmap = RoadmapState::default();
        roadmap.set_input("Retail");
        let request = roadmap.begin(LanguageCode::Fa).unwrap();
        roadmap.complete(request.dispatch(&fake).await);

        assert_eq!(
            roadmap.result(),
            Some(get_locale(LanguageCode::Fa).roadmap.error)
        );
        assert!(!roadmap.is_loading());
    }

    #[tokio::test]
    async fn only_the_latest_request_wins() {
        let fake = FakeInference::new();
        fake.push_reply("first").push_reply("second");

        let mut roadmap = RoadmapState::default();
        roadmap.set_input("Retail");
        let first = roadmap.begin(LanguageCode::En).unwrap();
        let first_outcome = first.dispatch(&fake).await;

        // the first request is still unanswered from the state's view; force a
        // second one as a concurrent caller would after the trigger re-enabled.
        roadmap.loading = false;
        let second = roadmap.begin(LanguageCode::En).unwrap();
        let second_outcome = second.dispatch(&fake).await;

        assert!(roadmap.complete(second_outcome));
        assert!(!roadmap.complete(first_outcome));
        assert_eq!(roadmap.result(), Some("second"));
    }
}
