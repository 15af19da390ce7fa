//! Best-effort text generation over an ordered list of hosted inference
//! endpoints. Every failure is swallowed: a dead endpoint just means the
//! next one gets tried, and an exhausted list means no enrichment.

use crate::domain::ports::TextGenerator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 8;
const MAX_PROMPT_CHARS: usize = 500;
const MAX_GENERATED_LENGTH: u32 = 200;
const SAMPLING_TEMPERATURE: f32 = 0.6;

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
    do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: MAX_GENERATED_LENGTH,
            temperature: SAMPLING_TEMPERATURE,
            do_sample: true,
        }
    }
}

/// Hosted generation APIs answer with an array of candidates carrying either
/// a generated_text or a summary_text field.
#[derive(Debug, Deserialize)]
struct GenerationPayload {
    #[serde(default)]
    generated_text: Option<String>,
    #[serde(default)]
    summary_text: Option<String>,
}

impl GenerationPayload {
    fn into_text(self) -> Option<String> {
        self.generated_text
            .filter(|t| !t.is_empty())
            .or(self.summary_text.filter(|t| !t.is_empty()))
    }
}

pub struct InferenceChain {
    client: Client,
    endpoints: Vec<String>,
    token: Option<String>,
    timeout: Duration,
}

impl InferenceChain {
    pub fn new(endpoints: Vec<String>, token: Option<String>, timeout_seconds: u64) -> Self {
        Self {
            client: Client::new(),
            endpoints,
            token,
            timeout: Duration::from_secs(timeout_seconds),
        }
    }

    /// Walk the endpoint list in order and return the first usable text.
    /// Total: transport errors, timeouts and malformed payloads all resolve
    /// to trying the next endpoint, and an empty or exhausted list to `None`.
    pub async fn try_enrich(&self, prompt: &str) -> Option<String> {
        let prompt = truncate_chars(prompt, MAX_PROMPT_CHARS);

        for endpoint in &self.endpoints {
            tracing::debug!("🤖 Requesting generation from {}", endpoint);
            match self.attempt(endpoint, prompt).await {
                Ok(Some(text)) => {
                    tracing::info!("✅ Generation succeeded via {}", endpoint);
                    return Some(text);
                }
                Ok(None) => {
                    tracing::warn!("Endpoint {} returned no usable text", endpoint);
                }
                Err(e) => {
                    tracing::warn!("❌ Endpoint {} failed: {}", endpoint, e);
                }
            }
        }

        None
    }

    async fn attempt(
        &self,
        endpoint: &str,
        prompt: &str,
    ) -> std::result::Result<Option<String>, reqwest::Error> {
        let mut request = self
            .client
            .post(endpoint)
            .timeout(self.timeout)
            .json(&GenerationRequest {
                inputs: prompt,
                parameters: GenerationParameters::default(),
            });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let payloads: Vec<GenerationPayload> = response.json().await?;

        Ok(payloads.into_iter().next().and_then(GenerationPayload::into_text))
    }
}

#[async_trait]
impl TextGenerator for InferenceChain {
    async fn generate(&self, prompt: &str) -> Option<String> {
        self.try_enrich(prompt).await
    }
}

/// Cut at a character boundary, never inside a multi-byte sequence.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
