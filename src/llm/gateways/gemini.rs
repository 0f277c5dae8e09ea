//! Gemini gateway for vision requests.
//!
//! This module talks to Google's Generative Language API (`generateContent`),
//! sending one user turn made of prompt text and one inline JPEG image.

use crate::error::{IdentifyError, Result};
use crate::llm::gateway::{GenerationConfig, VisionGateway};
use crate::llm::models::{GenerateContentRequest, GenerateContentResponse, InlineImage};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Read the API key from the environment.
///
/// `GEMINI_API_KEY` wins; `EXPO_PUBLIC_GEMINI_API_KEY` is accepted so an existing
/// mobile `.env` file works unchanged.
pub fn api_key_from_env() -> String {
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var("EXPO_PUBLIC_GEMINI_API_KEY").ok())
        .map(|k| k.trim().to_string())
        .unwrap_or_default()
}

/// Configuration for connecting to the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<std::time::Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: api_key_from_env(),
            base_url: std::env::var("GEMINI_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: None,
        }
    }
}

/// Gateway for Google's hosted Gemini models.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// Create a new Gemini gateway with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeminiConfig::default())
    }

    /// Create a new Gemini gateway with custom configuration.
    pub fn with_config(config: GeminiConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("Gemini API key is not configured; live identification requests will fail");
        }

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        });

        Self { client, config }
    }

    /// Create gateway with custom API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_config(GeminiConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Create gateway with custom API key and base URL.
    pub fn with_api_key_and_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::with_config(GeminiConfig {
            api_key: api_key.into(),
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

impl Default for GeminiGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        image: &InlineImage,
        config: &GenerationConfig,
    ) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(IdentifyError::ConfigError("Gemini API key is not set".to_string()));
        }

        info!("Delegating to Gemini for image analysis");
        debug!(
            model = model,
            prompt_chars = prompt.len(),
            image_bytes_b64 = image.data.len(),
            "Building generateContent request"
        );

        let body = GenerateContentRequest::single_turn(prompt, image, config);

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(IdentifyError::GatewayError(format!(
                "Gemini API error: {} {}",
                status, detail
            )));
        }

        let response_body: GenerateContentResponse = response.json().await?;

        response_body
            .text()
            .ok_or_else(|| IdentifyError::ApiError("No text in Gemini response".to_string()))
    }
}
