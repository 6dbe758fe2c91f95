//! HTTP client abstraction for talking to the inference backend.
//!
//! The concrete Gemini provider only needs "POST this JSON, give me the
//! response body". Putting that one operation behind a trait lets provider
//! tests inject canned responses or failures without touching the network.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Minimal HTTP capability consumed by [`crate::inference::GeminiProvider`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a POST request with a JSON body and returns the raw response
    /// body as text.
    ///
    /// Errors only on transport-level failure (the request never completed
    /// or the body could not be read). An HTTP error status with a readable
    /// body is returned as text; the caller decides what the payload means.
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<String>;
}

/// Production implementation backed by reqwest.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<String> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.json(body).send().await?;
        Ok(response.text().await?)
    }
}
