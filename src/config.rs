//! Process configuration read once at startup.

use crate::llm::gateways::gemini::{api_key_from_env, DEFAULT_BASE_URL};
use crate::mock::DEFAULT_MOCK_DELAY;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
    pub use_mock: bool,
    pub mock_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            use_mock: false,
            mock_delay: DEFAULT_MOCK_DELAY,
        }
    }
}

fn flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AppConfig {
    /// Load `.env` (if present) and read settings from the environment.
    ///
    /// A missing API key is logged, not fatal: mock mode still works, and live calls
    /// report a configuration error when attempted.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_current_env()
    }

    /// Read settings from the process environment without touching `.env`
    pub fn from_current_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            api_key: api_key_from_env(),
            base_url: std::env::var("GEMINI_API_ENDPOINT").unwrap_or(defaults.base_url),
            model: std::env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.model),
            timeout: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
            use_mock: std::env::var("USE_MOCK_API").map(|v| flag(&v)).unwrap_or(false),
            mock_delay: std::env::var("MOCK_DELAY_MS")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.mock_delay),
        };

        if config.api_key.is_empty() {
            warn!("GEMINI_API_KEY is not defined in the environment or .env file");
        }

        config
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
