//! Identify plants and suggest recipes from a single photo.
//!
//! A photo goes through [`image::ImageFile`], is sent once to a hosted vision model by
//! an [`identifier::Identifier`], and the model's loosely structured answer is pulled
//! back into typed results by [`extract::parse_response`]. Screens drive the whole flow
//! through a [`session::CaptureSession`] and present it with the view-models in
//! [`render`].

pub mod config;
pub mod error;
pub mod extract;
pub mod identifier;
pub mod image;
pub mod llm;
pub mod mock;
pub mod prompts;
pub mod render;
pub mod results;
pub mod session;

pub use error::{IdentifyError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::error::{IdentifyError, Result};
    pub use crate::identifier::Identifier;
    pub use crate::image::ImageFile;
    pub use crate::llm::gateways::GeminiGateway;
    pub use crate::llm::{GenerationConfig, VisionGateway};
    pub use crate::render::{PlantReport, RecipeReport, ScreenState};
    pub use crate::results::{PlantIdentificationResult, RecipeIdentificationResult};
    pub use crate::session::{CaptureSession, DeviceCapabilities, ImageSource};
}
