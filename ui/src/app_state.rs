use api::inference::remote::RemoteInference;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    /// Backs the chat widget and the roadmap generator.
    pub inference: RemoteInference,
    /// Recipient of demo-request hand-offs.
    pub lead_recipient: &'static str,
}

/// Stable, non-reactive state shared through the component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(lead_recipient: &'static str) -> Self {
        Self(Arc::new(AppStateData {
            inference: RemoteInference,
            lead_recipient,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_eq<T: Eq>(_: &T) {}

    #[test]
    fn states_compare_by_content() {
        let state = AppState::new("leads@example.com");
        requires_eq(&state);
        assert_eq!(state, AppState::new("leads@example.com"));
        assert_ne!(state, AppState::new("other@example.com"));
        assert_eq!(state.inference, RemoteInference);
    }
}
