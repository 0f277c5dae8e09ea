use crate::error::Result;
use crate::llm::models::InlineImage;
use async_trait::async_trait;

/// Sampling settings sent with every identification request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

/// Abstract interface for hosted vision models
#[async_trait]
pub trait VisionGateway: Send + Sync {
    /// Send one prompt plus one inline image, returning the model's raw text answer
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        image: &InlineImage,
        config: &GenerationConfig,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();

        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.top_k, 32);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.max_output_tokens, 2048);
    }

    #[test]
    fn test_generation_config_custom() {
        let config = GenerationConfig {
            temperature: 0.9,
            max_output_tokens: 512,
            ..Default::default()
        };

        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.top_k, 32);
        assert_eq!(config.max_output_tokens, 512);
    }
}
