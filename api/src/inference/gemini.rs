//! Direct REST implementation of the inference traits for Gemini.
//!
//! Server only: the API key never leaves the process.

use super::ChatSession;
use super::GenerationConfig;
use super::InferenceError;
use super::InferenceService;
use super::CHAT_GENERATION;
use super::ONE_SHOT_GENERATION;
use dioxus_logger::tracing;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for the Gemini API.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `GEMINI_API_KEY` (or `API_KEY`): the credential. Required for any call.
    /// - `GEMINI_MODEL`: model name, defaults to `gemini-2.5-flash`.
    /// - `GEMINI_BASE_URL`: models endpoint, defaults to the public v1beta API.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        let api_key = lookup("GEMINI_API_KEY")
            .and_then(non_empty)
            .or_else(|| lookup("API_KEY").and_then(non_empty));
        let model = lookup("GEMINI_MODEL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let base_url = lookup("GEMINI_BASE_URL")
            .and_then(non_empty)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

/// A cheap-to-clone handle on the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    async fn generate(&self, body: &GenerateContentRequest) -> Result<String, InferenceError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            InferenceError::NotConfigured("GEMINI_API_KEY is not set".to_string())
        })?;

        let url = format!(
            "{}/{model}:generateContent",
            self.config.base_url,
            model = self.config.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| InferenceError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| InferenceError::Malformed(err.to_string()))?;

        Ok(extract_text_response(parsed))
    }
}

impl InferenceService for GeminiClient {
    type Session = GeminiChat;

    fn create_session(&self, system_instruction: &str) -> GeminiChat {
        GeminiChat {
            client: self.clone(),
            system_instruction: system_instruction.to_string(),
            history: Mutex::new(Vec::new()),
        }
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, InferenceError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: None,
            generation_config: ONE_SHOT_GENERATION.into(),
        };
        self.generate(&request).await
    }
}

/// A conversation. Turns are serialized through the history lock, so a
/// session never sends two requests at once.
pub struct GeminiChat {
    client: GeminiClient,
    system_instruction: String,
    history: Mutex<Vec<Content>>,
}

impl GeminiChat {
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    fn request_for(&self, history: &[Content], message: &str) -> GenerateContentRequest {
        let mut contents = history.to_vec();
        contents.push(Content::user(message));
        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(&self.system_instruction)),
            generation_config: CHAT_GENERATION.into(),
        }
    }
}

impl ChatSession for GeminiChat {
    async fn send(&self, message: &str) -> Result<String, InferenceError> {
        let mut history = self.history.lock().await;
        let request = self.request_for(&history, message);

        let reply = self.client.generate(&request).await?;
        tracing::debug!(
            "gemini chat turn {} answered with {} chars",
            history.len() / 2 + 1,
            reply.len()
        );

        // failed turns are not recorded, matching the hosted SDK's chat history.
        history.push(Content::user(message));
        history.push(Content::model(&reply));
        Ok(reply)
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: WireGenerationConfig,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self::with_role(Some("user"), text)
    }

    fn model(text: &str) -> Self {
        Self::with_role(Some("model"), text)
    }

    fn system(text: &str) -> Self {
        Self::with_role(None, text)
    }

    fn with_role(role: Option<&'static str>, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_k: u32,
}

impl From<GenerationConfig> for WireGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Option<Vec<PartResponse>>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate. A response without
/// text yields an empty string; callers substitute their own fallback.
fn extract_text_response(response: GenerateContentResponse) -> String {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .map(|parts| parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default()
}

fn map_http_error(status: StatusCode, body: String) -> InferenceError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    InferenceError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GeminiConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GeminiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn config_defaults_and_key_fallback() {
        let config = config_from(&[("API_KEY", "abc")]);
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = config_from(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "secondary"),
            ("GEMINI_BASE_URL", "http://localhost:9000/models/"),
        ]);
        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(config.base_url, "http://localhost:9000/models");

        assert_eq!(config_from(&[("GEMINI_API_KEY", "  ")]).api_key, None);
    }

    #[test]
    fn chat_request_carries_history_instruction_and_sampling() {
        let chat = GeminiClient::new(config_from(&[])).create_session("be formal");
        let history = vec![Content::user("hi"), Content::model("hello")];
        let request = chat.request_for(&history, "prices?");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] },
                    { "role": "model", "parts": [{ "text": "hello" }] },
                    { "role": "user", "parts": [{ "text": "prices?" }] },
                ],
                "systemInstruction": { "parts": [{ "text": "be formal" }] },
                "generationConfig": { "temperature": 0.7f32, "topK": 40 },
            })
        );
    }

    #[test]
    fn extracts_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "one " }, { "text": "two" }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } },
            ]
        }))
        .unwrap();
        assert_eq!(extract_text_response(response), "one two");
    }

    #[test]
    fn missing_text_is_empty_not_an_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert_eq!(extract_text_response(response), "");
    }

    #[test]
    fn http_errors_keep_status_and_service_message() {
        let body = r#"{"error":{"code":429,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string()),
            InferenceError::Status {
                status: 429,
                message: "RESOURCE_EXHAUSTED: quota".to_string(),
            }
        );

        assert_eq!(
            map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string()),
            InferenceError::Status {
                status: 502,
                message: "upstream down".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GeminiClient::new(config_from(&[]));
        let err = client.generate_once("hello").await.unwrap_err();
        assert!(matches!(err, InferenceError::NotConfigured(_)));
    }
}
