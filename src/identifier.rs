use crate::config::AppConfig;
use crate::error::Result;
use crate::extract::parse_response;
use crate::image::ImageFile;
use crate::llm::gateway::{GenerationConfig, VisionGateway};
use crate::llm::gateways::{GeminiConfig, GeminiGateway};
use crate::mock::MockFixture;
use crate::results::{IdentificationResult, PlantIdentificationResult, RecipeIdentificationResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

enum Backend {
    Live {
        model: String,
        gateway: Arc<dyn VisionGateway>,
    },
    Mock {
        delay: Duration,
    },
}

/// Main interface for turning a photo into a typed identification result
pub struct Identifier {
    backend: Backend,
    config: GenerationConfig,
}

impl Identifier {
    /// Create an identifier that calls `model` through `gateway`
    pub fn new(model: impl Into<String>, gateway: Arc<dyn VisionGateway>) -> Self {
        Self {
            backend: Backend::Live {
                model: model.into(),
                gateway,
            },
            config: GenerationConfig::default(),
        }
    }

    /// Create an identifier that returns canned results after `delay`
    pub fn mock(delay: Duration) -> Self {
        Self {
            backend: Backend::Mock { delay },
            config: GenerationConfig::default(),
        }
    }

    /// Build from process configuration, honouring mock mode
    pub fn from_config(config: &AppConfig) -> Self {
        if config.use_mock {
            return Self::mock(config.mock_delay);
        }

        let gateway = GeminiGateway::with_config(GeminiConfig {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        });
        Self::new(config.model.clone(), Arc::new(gateway))
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock { .. })
    }

    pub async fn identify_plant(&self, image: &ImageFile) -> Result<PlantIdentificationResult> {
        self.identify(image).await
    }

    pub async fn identify_recipe(&self, image: &ImageFile) -> Result<RecipeIdentificationResult> {
        self.identify(image).await
    }

    /// Run the full pipeline for one image: encode, call the model once, extract and
    /// validate the answer.
    ///
    /// Failures are returned as-is; nothing is retried.
    pub async fn identify<T>(&self, image: &ImageFile) -> Result<T>
    where
        T: IdentificationResult + MockFixture,
    {
        match &self.backend {
            Backend::Mock { delay } => {
                info!("Returning mock {} identification", T::KIND);
                tokio::time::sleep(*delay).await;
                Ok(T::fixture())
            }
            Backend::Live { model, gateway } => {
                info!("Identifying {} from {}", T::KIND, image.path().display());

                let inline = image.to_inline().await?;
                let text = gateway.generate(model, T::KIND.prompt(), &inline, &self.config).await?;
                debug!("Raw model response for {}: {}", T::KIND, text);

                parse_response(&text)
            }
        }
    }
}
