use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GenerationError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One outbound text-generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: Option<f32>,
}

/// Remote text generation. Implemented over HTTP by `GeminiClient` and by
/// in-process fakes in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run the request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` for transport, status or payload failures.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Read `PATHWAY_AI_API_KEY` (or `API_KEY`), `PATHWAY_AI_BASE_URL` and
    /// `PATHWAY_AI_TIMEOUT_SECS`. `None` when no key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("PATHWAY_AI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("PATHWAY_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = env::var("PATHWAY_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout),
        })
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `generateContent` client for the hosted Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        let client = match config.as_ref() {
            Some(cfg) => Client::builder()
                .timeout(cfg.timeout)
                .build()
                .unwrap_or_else(|err| {
                    warn!(error = %err, "could not build AI HTTP client, using defaults");
                    Client::default()
                }),
            None => Client::default(),
        };
        Self { client, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;

        debug!(model = %request.model, "sending generateContent request");
        let response = self.build_request(config, request).send().await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(GenerationError::EmptyResponse)
    }
}

impl GeminiClient {
    // The timeout is set per request too, so it holds even when the client
    // builder failed and a default client is in use.
    fn build_request(
        &self,
        config: &GeminiConfig,
        request: &GenerationRequest,
    ) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            request.model
        );
        let payload = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: request
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        self.client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .timeout(config.timeout)
            .json(&payload)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, joined without separators.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Option<String> {
        serde_json::from_str::<GenerateContentResponse>(raw)
            .unwrap()
            .text()
    }

    #[test]
    fn joins_text_parts_verbatim() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"  Imagine "},{"text":"you're in a clinic...\n"}]}}]}"#;
        assert_eq!(parse(raw).as_deref(), Some("  Imagine you're in a clinic...\n"));
    }

    #[test]
    fn missing_candidates_is_empty() {
        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#), None);
        assert_eq!(parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#), None);
    }

    #[test]
    fn request_omits_generation_config_without_temperature() {
        let payload = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "sys".into() }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "hi".into() }],
            }],
            generation_config: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("generationConfig").is_none());
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[tokio::test]
    async fn unconfigured_client_is_disabled() {
        let client = GeminiClient::new(None);
        assert!(!client.enabled());
        let request = GenerationRequest {
            model: "m".into(),
            system_instruction: String::new(),
            prompt: "p".into(),
            temperature: None,
        };
        assert!(matches!(
            client.generate(&request).await,
            Err(GenerationError::Disabled)
        ));
    }

    #[test]
    fn every_request_carries_the_configured_timeout() {
        let config = GeminiConfig::new("http://127.0.0.1:9/v1beta", "k")
            .with_timeout(Duration::from_millis(750));
        let client = GeminiClient {
            client: Client::default(),
            config: Some(config.clone()),
        };
        let request = GenerationRequest {
            model: "gemini-3-flash-preview".into(),
            system_instruction: "sys".into(),
            prompt: "p".into(),
            temperature: Some(0.7),
        };

        let built = client.build_request(&config, &request).build().unwrap();
        assert_eq!(built.timeout(), Some(&Duration::from_millis(750)));
        assert_eq!(
            built.url().as_str(),
            "http://127.0.0.1:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
