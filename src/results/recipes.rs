use crate::error::{IdentifyError, Result};
use crate::prompts::IdentificationKind;
use crate::results::wire::{lenient_count, nullable, optional_string_or_number, string_or_number};
use crate::results::{check_confidence, IdentificationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "mudah" | "gampang" => Ok(Difficulty::Easy),
            "medium" | "moderate" | "sedang" | "menengah" => Ok(Difficulty::Medium),
            "hard" | "difficult" | "sulit" | "susah" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: if unit.is_empty() { None } else { Some(unit) },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "nullable")]
    pub instructions: Vec<String>,
    /// Minutes
    #[serde(default, deserialize_with = "lenient_count")]
    pub prep_time: u32,
    /// Minutes
    #[serde(default, deserialize_with = "lenient_count")]
    pub cook_time: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// Detected ingredients plus recipe ideas derived from one model response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIdentificationResult {
    #[serde(default, deserialize_with = "nullable")]
    pub detected_ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "nullable")]
    pub suggested_recipes: Vec<Recipe>,
    pub confidence: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl IdentificationResult for RecipeIdentificationResult {
    const KIND: IdentificationKind = IdentificationKind::Recipe;

    fn validate(&self) -> Result<()> {
        if let Some(i) = self.detected_ingredients.iter().position(|i| i.name.trim().is_empty()) {
            return Err(IdentifyError::ValidationError(format!(
                "detected ingredient {} has no name",
                i
            )));
        }
        for (i, recipe) in self.suggested_recipes.iter().enumerate() {
            if recipe.name.trim().is_empty() {
                return Err(IdentifyError::ValidationError(format!(
                    "suggested recipe {} has no name",
                    i
                )));
            }
        }
        check_confidence(self.confidence)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn set_timestamp(&mut self, at: DateTime<Utc>) {
        self.timestamp = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Mudah".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("sedang".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("SULIT".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_ingredient_new_drops_empty_unit() {
        assert_eq!(Ingredient::new("Garam", "1", "").unit, None);
        assert_eq!(Ingredient::new("Garam", "1", "sdt").unit, Some("sdt".to_string()));
    }

    #[test]
    fn test_result_deserializes_loose_model_output() {
        let value = json!({
            "detectedIngredients": [
                {"name": "Telur", "amount": 2, "unit": "butir"},
                {"name": "Bawang", "amount": "1"}
            ],
            "suggestedRecipes": [{
                "name": "Telur Dadar",
                "description": "Sederhana",
                "ingredients": [{"name": "Telur", "amount": "2", "unit": "butir"}],
                "instructions": ["Kocok telur", "Goreng"],
                "prepTime": "5 menit",
                "cookTime": 7.0,
                "servings": 2,
                "difficulty": "mudah"
            }],
            "confidence": 0.7
        });

        let result: RecipeIdentificationResult = serde_json::from_value(value).unwrap();

        assert_eq!(result.detected_ingredients[0].amount, "2");
        assert_eq!(result.detected_ingredients[1].unit, None);
        let recipe = &result.suggested_recipes[0];
        assert_eq!(recipe.prep_time, 5);
        assert_eq!(recipe.cook_time, 7);
        assert_eq!(recipe.total_time(), 12);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.tags.is_empty());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_missing_difficulty_is_error() {
        let value = json!({
            "suggestedRecipes": [{"name": "Sup"}],
            "confidence": 0.5
        });
        let result: std::result::Result<RecipeIdentificationResult, _> =
            serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_unnamed_ingredient() {
        let result = RecipeIdentificationResult {
            detected_ingredients: vec![Ingredient::new("", "1", "")],
            suggested_recipes: vec![],
            confidence: 0.5,
            timestamp: Utc::now(),
        };
        match result.validate() {
            Err(IdentifyError::ValidationError(msg)) => assert!(msg.contains("ingredient 0")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_confidence() {
        let result = RecipeIdentificationResult {
            detected_ingredients: vec![],
            suggested_recipes: vec![],
            confidence: -0.1,
            timestamp: Utc::now(),
        };
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_total_time_saturates() {
        let recipe: Recipe = serde_json::from_value(json!({
            "name": "Rendang",
            "prepTime": 4294967295u64,
            "cookTime": 10,
            "difficulty": "sulit"
        }))
        .unwrap();
        assert_eq!(recipe.total_time(), u32::MAX);
    }
}
