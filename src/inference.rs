//! Inference providers for icon generation.
//!
//! The pipeline only requires the [`InferenceProvider`] capability: prompt
//! in, generated text out. The shipped backends are [`GeminiProvider`]
//! (Google Gemini over HTTP) and [`MockProvider`] (deterministic canned
//! responses for tests and offline runs). Which one a pipeline gets is
//! decided by the composition root, never in here.

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::error::ProviderError;
use crate::http_client::{HttpClient, ReqwestHttpClient};

/// Capability of turning a prompt into generated text.
///
/// Every call to a real backend is a billable network interaction; callers
/// are expected to bound how often they invoke it. The pipeline issues at
/// most two calls per generation.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Produces generated text for `prompt`.
    ///
    /// Fails with [`ProviderError`] when the backend is unreachable,
    /// rejects the request, or returns no usable content.
    async fn infer(&self, prompt: &str) -> Result<String, ProviderError>;
}

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Inference provider backed by the Gemini generateContent API.
pub struct GeminiProvider {
    http: Box<dyn HttpClient>,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Creates a provider that talks to the real Gemini API.
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_http_client(Box::new(ReqwestHttpClient::new()), api_key, model)
    }

    /// Creates a provider over an injected HTTP client (used by tests).
    pub fn with_http_client(http: Box<dyn HttpClient>, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl InferenceProvider for GeminiProvider {
    async fn infer(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let url = format!("{GEMINI_API_BASE}/models/{}:generateContent", self.model);
        info!("Requesting generation from model '{}'", self.model);

        let response_text = self
            .http
            .post_json(
                &url,
                &[
                    ("x-goog-api-key", self.api_key.as_str()),
                    ("content-type", "application/json"),
                ],
                &request_body,
            )
            .await
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        extract_generated_text(&response_text)
    }
}

/// Pulls the generated text out of a raw generateContent response body.
fn extract_generated_text(response_text: &str) -> Result<String, ProviderError> {
    let response: serde_json::Value = serde_json::from_str(response_text).map_err(|_| {
        warn!("Gemini response was not JSON: {}", response_text);
        ProviderError::Rejected(format!("unparseable response: {response_text}"))
    })?;

    if let Some(message) = response
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        warn!("Gemini API rejected the request: {}", message);
        return Err(ProviderError::Rejected(message.to_string()));
    }

    let generated = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|p| p.as_array())
        .and_then(|arr| arr.first())
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str());

    match generated {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => {
            warn!("Gemini response carried no generated text: {}", response_text);
            Err(ProviderError::EmptyContent)
        }
    }
}

/// Deterministic offline provider.
///
/// Answers from a fixed set of canned responses keyed on words in the
/// user's request, the way a generation model plausibly would, including
/// replying with the persona text (plain prose, not markup) when asked a
/// meta-question about itself.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Recovers the user's request from the rendered prompt.
///
/// The instruction template itself mentions words like "circle" and
/// "Who are you?", so keyword matching has to run against the embedded
/// request only, not the whole prompt.
fn embedded_request(prompt: &str) -> &str {
    const MARKER: &str = "the following request: \"";
    let Some(start) = prompt.find(MARKER) else {
        return prompt;
    };
    let tail = &prompt[start + MARKER.len()..];
    match tail.rfind('"') {
        Some(end) => &tail[..end],
        None => tail,
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    async fn infer(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = embedded_request(prompt).to_lowercase();
        info!("Mock provider answering request: {}", request);

        let artifact = if request.contains("who are you") || request.contains("what do you do") {
            // Meta-question: the canned persona reply, which is prose rather
            // than markup and therefore fails structural validation.
            "I am IcoGen, an AI assistant that generates custom SVG icons from text descriptions."
                .to_string()
        } else if request.contains("circle") || request.contains("dot") {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">\n  <title>circle icon</title>\n  <circle cx=\"12\" cy=\"12\" r=\"10\" fill=\"currentColor\"/>\n</svg>"
                .to_string()
        } else if request.contains("star") {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">\n  <title>star icon</title>\n  <polygon points=\"12,2 15,9 22,9 16,14 18,21 12,17 6,21 8,14 2,9 9,9\" fill=\"currentColor\"/>\n</svg>"
                .to_string()
        } else if request.contains("square") {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">\n  <title>square icon</title>\n  <rect x=\"3\" y=\"3\" width=\"18\" height=\"18\" rx=\"2\" fill=\"currentColor\"/>\n</svg>"
                .to_string()
        } else {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">\n  <title>generated icon</title>\n  <path d=\"M12 2 L22 12 L12 22 L2 12 Z\" fill=\"currentColor\"/>\n</svg>"
                .to_string()
        };

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_support::MockHttpClient;
    use crate::prompt::build_prompt;
    use crate::validation::is_structurally_valid;

    fn gemini_over(http: MockHttpClient) -> GeminiProvider {
        GeminiProvider::with_http_client(
            Box::new(http),
            "test-key".to_string(),
            "gemini-pro".to_string(),
        )
    }

    #[tokio::test]
    async fn test_gemini_extracts_generated_text() {
        let response = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "<svg viewBox=\"0 0 1 1\"></svg>" }
                        ]
                    }
                }
            ]
        }"#;
        let provider = gemini_over(MockHttpClient::new(response));

        let artifact = provider.infer("a prompt").await.unwrap();
        assert_eq!(artifact, "<svg viewBox=\"0 0 1 1\"></svg>");
    }

    #[tokio::test]
    async fn test_gemini_requests_configured_model_endpoint() {
        let http = MockHttpClient::new(
            r#"{"candidates":[{"content":{"parts":[{"text":"<svg></svg>"}]}}]}"#,
        );
        let log = http.requests_log();
        let provider = GeminiProvider::with_http_client(
            Box::new(http),
            "test-key".to_string(),
            "gemini-1.5-flash".to_string(),
        );

        provider.infer("a prompt").await.unwrap();

        let urls = log.lock().unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].ends_with("/models/gemini-1.5-flash:generateContent"));
    }

    #[tokio::test]
    async fn test_gemini_maps_error_body_to_rejected() {
        let response = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        let provider = gemini_over(MockHttpClient::new(response));

        let err = provider.infer("a prompt").await.unwrap_err();
        match err {
            ProviderError::Rejected(message) => assert!(message.contains("API key not valid")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_gemini_maps_missing_candidates_to_empty_content() {
        let provider = gemini_over(MockHttpClient::new(r#"{"candidates":[]}"#));

        let err = provider.infer("a prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyContent));
    }

    #[tokio::test]
    async fn test_gemini_maps_blank_text_to_empty_content() {
        let response = r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#;
        let provider = gemini_over(MockHttpClient::new(response));

        let err = provider.infer("a prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyContent));
    }

    #[tokio::test]
    async fn test_gemini_maps_transport_failure_to_unreachable() {
        let provider = gemini_over(MockHttpClient::failing("connection refused"));

        let err = provider.infer("a prompt").await.unwrap_err();
        match err {
            ProviderError::Unreachable(message) => {
                assert!(message.contains("connection refused"))
            }
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_request_recovers_description() {
        let prompt = build_prompt("a tiny star, yellow");
        assert_eq!(embedded_request(&prompt), "a tiny star, yellow");
    }

    #[test]
    fn test_embedded_request_handles_quotes_in_description() {
        let prompt = build_prompt("a \"quoted\" star");
        assert_eq!(embedded_request(&prompt), "a \"quoted\" star");
    }

    #[tokio::test]
    async fn test_mock_provider_returns_markup_for_icon_requests() {
        let provider = MockProvider::new();

        for description in ["a blue circle", "a gold star", "a rounded square", "a fox"] {
            let artifact = provider.infer(&build_prompt(description)).await.unwrap();
            assert!(
                is_structurally_valid(&artifact),
                "expected markup for {description:?}, got {artifact:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_mock_provider_answers_meta_questions_with_prose() {
        let provider = MockProvider::new();

        let artifact = provider.infer(&build_prompt("Who are you?")).await.unwrap();
        assert!(artifact.contains("I am IcoGen"));
        assert!(!is_structurally_valid(&artifact));
    }

    #[tokio::test]
    async fn test_mock_provider_is_deterministic() {
        let provider = MockProvider::new();
        let prompt = build_prompt("a green circle");

        let first = provider.infer(&prompt).await.unwrap();
        let second = provider.infer(&prompt).await.unwrap();
        assert_eq!(first, second);
    }
}
