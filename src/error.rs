//! Error types and result aliases for the identilens library.
//!
//! This module defines the core error type [`IdentifyError`] and the [`Result`] type alias
//! used throughout the library. Every step of the identification pipeline (image checks,
//! the model call, response extraction) reports failures through this one type so callers
//! can decide how to surface them.

use crate::session::Permission;
use thiserror::Error;

/// Shown when the identification service cannot be reached or answers badly.
pub const API_ERROR_MESSAGE: &str =
    "Error connecting to the identification service. Please check your connection and try again.";
pub const IMAGE_PROCESSING_MESSAGE: &str = "Error processing image. Please try again.";
pub const CAMERA_PERMISSION_MESSAGE: &str = "Camera permission is required to use this feature";
pub const GALLERY_PERMISSION_MESSAGE: &str = "Gallery access is required to use this feature";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("Vision gateway error: {0}")]
    GatewayError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidImage(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(Permission),

    #[error("An identification request is already in progress")]
    RequestInFlight,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IdentifyError {
    /// True for the camera/gallery permission category, which the UI shows as a
    /// blocking alert instead of an inline error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, IdentifyError::PermissionDenied(_))
    }

    /// Message suitable for showing to the person holding the phone.
    ///
    /// Transport failures and malformed model answers map to the same text.
    pub fn user_message(&self) -> &'static str {
        match self {
            IdentifyError::PermissionDenied(Permission::Camera) => CAMERA_PERMISSION_MESSAGE,
            IdentifyError::PermissionDenied(Permission::MediaLibrary) => {
                GALLERY_PERMISSION_MESSAGE
            }
            IdentifyError::GatewayError(_)
            | IdentifyError::ApiError(_)
            | IdentifyError::HttpError(_)
            | IdentifyError::SerializationError(_)
            | IdentifyError::ParseError(_)
            | IdentifyError::ValidationError(_)
            | IdentifyError::ConfigError(_) => API_ERROR_MESSAGE,
            IdentifyError::InvalidImage(_) | IdentifyError::IoError(_) => IMAGE_PROCESSING_MESSAGE,
            IdentifyError::RequestInFlight => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentifyError>;
