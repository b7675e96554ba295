use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

#[cfg(feature = "gemini-client")]
use crate::error::BotornotError;
#[cfg(feature = "gemini-client")]
use serde_json::json;
#[cfg(feature = "gemini-client")]
use tracing::instrument;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmRequest {
    pub prompt: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            metadata: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse>;
}

pub type DynLlmClient = Arc<dyn LlmClient>;

/// Offline client for tests and the CLI dry-run mode: echoes the tail of the
/// prompt back as the generated text.
#[derive(Default, Clone)]
pub struct LocalEchoClient;

#[async_trait]
impl LlmClient for LocalEchoClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        let tail: String = request
            .prompt
            .chars()
            .rev()
            .take(120)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        Ok(LlmResponse {
            content: format!("[echo] {}", tail.trim()),
            metadata: request.metadata,
        })
    }
}

#[cfg(feature = "gemini-client")]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[cfg(feature = "gemini-client")]
impl GeminiClient {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(
            "https://generativelanguage.googleapis.com/v1beta",
            api_key,
            Self::DEFAULT_MODEL,
        )
    }

    pub fn with_base_url<S1, S2, S3>(base_url: S1, api_key: S2, model: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[cfg(feature = "gemini-client")]
#[async_trait]
impl LlmClient for GeminiClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{
                "parts": [{ "text": request.prompt }]
            }]
        });

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotornotError::Upstream(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotornotError::Upstream(anyhow::anyhow!(
                "Gemini request failed with status {}",
                status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| BotornotError::Upstream(e.into()))?;
        let content = payload["candidates"]
            .get(0)
            .and_then(|candidate| candidate["content"]["parts"][0]["text"].as_str())
            .ok_or_else(|| {
                BotornotError::Upstream(anyhow::anyhow!("missing candidate text in response"))
            })?;

        Ok(LlmResponse {
            content: content.to_string(),
            metadata: Some(payload),
        })
    }
}
