pub mod gateway;
pub mod gateways;
pub mod models;

pub use gateway::{GenerationConfig, VisionGateway};
pub use models::{GenerateContentRequest, GenerateContentResponse, InlineImage};
