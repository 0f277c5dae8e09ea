pub mod plants;
pub mod recipes;
pub mod wire;

pub use plants::{
    CareGuide, GrowingConditions, Plant, PlantAnalysis, PlantDisease, PlantIdentificationResult,
    Severity,
};
pub use recipes::{Difficulty, Ingredient, Recipe, RecipeIdentificationResult};

use crate::error::{IdentifyError, Result};
use crate::prompts::IdentificationKind;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A typed result the model can be asked to produce
pub trait IdentificationResult: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// Which prompt produces this shape
    const KIND: IdentificationKind;

    /// Checks that serde cannot express, run before the result reaches display code
    fn validate(&self) -> Result<()>;

    fn timestamp(&self) -> DateTime<Utc>;

    fn set_timestamp(&mut self, at: DateTime<Utc>);
}

pub(crate) fn check_confidence(confidence: f64) -> Result<()> {
    if confidence.is_finite() && (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(IdentifyError::ValidationError(format!(
            "confidence {} is outside [0, 1]",
            confidence
        )))
    }
}
