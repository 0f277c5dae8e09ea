//! View-models for result screens.
//!
//! Display code never reads the raw model structures directly. It receives a
//! [`ScreenState`] and, once loaded, a [`PlantReport`] or [`RecipeReport`] that has
//! already made the presentation decisions (which tabs exist, how healthy "Fair" is,
//! how to phrase an ingredient line). Both reports implement `Display` for terminals.

use crate::error::{IdentifyError, Result};
use crate::results::{
    Difficulty, Ingredient, PlantDisease, PlantIdentificationResult, Recipe,
    RecipeIdentificationResult, Severity,
};
use std::fmt;

/// What a result screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Loading,
    Loaded(T),
    Failed { message: String, permission: bool },
}

impl<T> ScreenState<T> {
    /// Map a finished request to the screen, collapsing transport and shape failures
    /// into the same user-facing message
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ScreenState::Loaded(value),
            Err(err) => Self::failed(&err),
        }
    }

    pub fn failed(err: &IdentifyError) -> Self {
        ScreenState::Failed {
            message: err.user_message().to_string(),
            permission: err.is_permission_denied(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScreenState<U> {
        match self {
            ScreenState::Loading => ScreenState::Loading,
            ScreenState::Loaded(value) => ScreenState::Loaded(f(value)),
            ScreenState::Failed {
                message,
                permission,
            } => ScreenState::Failed {
                message,
                permission,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
    Unknown,
}

impl HealthLevel {
    /// Classify the model's free-text health summary
    pub fn classify(overall_health: &str) -> Self {
        let health = overall_health.to_lowercase();
        if health.contains("excellent") || health.contains("very good") {
            HealthLevel::Excellent
        } else if health.contains("good") {
            HealthLevel::Good
        } else if health.contains("fair") {
            HealthLevel::Fair
        } else if health.contains("poor") {
            HealthLevel::Poor
        } else if health.contains("critical") || health.contains("bad") {
            HealthLevel::Critical
        } else {
            HealthLevel::Unknown
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            HealthLevel::Excellent => "#4CAF50",
            HealthLevel::Good => "#8BC34A",
            HealthLevel::Fair => "#FFC107",
            HealthLevel::Poor => "#FF9800",
            HealthLevel::Critical => "#F44336",
            HealthLevel::Unknown => "#9E9E9E",
        }
    }
}

pub fn severity_color(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Low) => "#4CAF50",
        Some(Severity::Medium) => "#FF9800",
        Some(Severity::High) => "#F44336",
        None => "#9E9E9E",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantTab {
    Overview,
    Disease,
    Treatment,
    Care,
    More,
}

impl PlantTab {
    pub fn label(self) -> &'static str {
        match self {
            PlantTab::Overview => "Ringkasan",
            PlantTab::Disease => "Penyakit",
            PlantTab::Treatment => "Penanganan",
            PlantTab::Care => "Perawatan",
            PlantTab::More => "Lainnya",
        }
    }
}

pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlantReport {
    pub title: String,
    pub scientific_name: String,
    pub confidence: String,
    pub health: Option<(String, HealthLevel)>,
    pub growth_stage: Option<String>,
    pub severity: Option<Severity>,
    pub tabs: Vec<PlantTab>,
    pub result: PlantIdentificationResult,
}

impl PlantReport {
    pub fn new(result: PlantIdentificationResult) -> Self {
        let mut tabs = vec![PlantTab::Overview];
        if result.detected_disease.is_some() {
            tabs.push(PlantTab::Disease);
            tabs.push(PlantTab::Treatment);
        }
        if result.plant.care_guide.is_some() {
            tabs.push(PlantTab::Care);
        }
        tabs.push(PlantTab::More);

        let health = result.analysis.as_ref().map(|a| {
            let level = HealthLevel::classify(&a.overall_health);
            let label = if a.overall_health.trim().is_empty() {
                "UNKNOWN".to_string()
            } else {
                a.overall_health.to_uppercase()
            };
            (label, level)
        });

        Self {
            title: result.plant.name.clone(),
            scientific_name: result.plant.scientific_name.clone(),
            confidence: confidence_percent(result.confidence),
            health,
            growth_stage: result.analysis.as_ref().and_then(|a| a.growth_stage.clone()),
            severity: result.detected_disease.as_ref().map(|d| d.severity),
            tabs,
            result,
        }
    }

    pub fn disease(&self) -> Option<&PlantDisease> {
        self.result.detected_disease.as_ref()
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", heading)?;
    for item in items {
        writeln!(f, "  - {}", item)?;
    }
    Ok(())
}

impl fmt::Display for PlantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.scientific_name)?;
        writeln!(f, "Confidence: {}", self.confidence)?;
        if let Some((label, _)) = &self.health {
            writeln!(f, "Health: {}", label)?;
        }
        if let Some(stage) = &self.growth_stage {
            writeln!(f, "Growth stage: {}", stage)?;
        }
        if !self.result.plant.description.is_empty() {
            writeln!(f, "\n{}", self.result.plant.description)?;
        }

        if let Some(disease) = self.disease() {
            writeln!(f, "\nDisease: {} [{}]", disease.name, disease.severity)?;
            if !disease.description.is_empty() {
                writeln!(f, "{}", disease.description)?;
            }
            write_list(f, "Symptoms", &disease.symptoms)?;
            write_list(f, "Causes", &disease.causes)?;
            write_list(f, "Treatments", &disease.treatments)?;
            write_list(f, "Organic solutions", &disease.organic_solutions)?;
            write_list(f, "Chemical solutions", &disease.chemical_solutions)?;
            write_list(f, "Prevention", &disease.preventions)?;
        }

        if let Some(analysis) = &self.result.analysis {
            write_list(f, "\nRecommended actions", &analysis.recommended_actions)?;
        }

        if let Some(care) = &self.result.plant.care_guide {
            writeln!(f, "\nCare guide:")?;
            writeln!(f, "  Watering: {}", care.watering)?;
            writeln!(f, "  Fertilizing: {}", care.fertilizing)?;
            writeln!(f, "  Pruning: {}", care.pruning)?;
            writeln!(f, "  Repotting: {}", care.repotting)?;
        }

        write_list(f, "\nFun facts", &self.result.plant.fun_facts)
    }
}

/// "2 cloves Garlic", or "Garlic" when no amount was given
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    [
        ingredient.amount.as_str(),
        ingredient.unit.as_deref().unwrap_or(""),
        ingredient.name.as_str(),
    ]
    .iter()
    .filter(|s| !s.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub name: String,
    pub description: String,
    pub total_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            total_minutes: recipe.total_time(),
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            ingredients: recipe.ingredients.iter().map(ingredient_line).collect(),
            steps: recipe.instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeReport {
    pub confidence: String,
    pub detected: Vec<String>,
    pub recipes: Vec<RecipeCard>,
}

impl RecipeReport {
    pub fn new(result: &RecipeIdentificationResult) -> Self {
        Self {
            confidence: confidence_percent(result.confidence),
            detected: result.detected_ingredients.iter().map(ingredient_line).collect(),
            recipes: result.suggested_recipes.iter().map(RecipeCard::from).collect(),
        }
    }
}

impl fmt::Display for RecipeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confidence: {}", self.confidence)?;
        write_list(f, "Detected ingredients", &self.detected)?;

        for (i, card) in self.recipes.iter().enumerate() {
            writeln!(
                f,
                "\n{}. {} ({} min, serves {}, {})",
                i + 1,
                card.name,
                card.total_minutes,
                card.servings,
                card.difficulty
            )?;
            if !card.description.is_empty() {
                writeln!(f, "{}", card.description)?;
            }
            write_list(f, "Ingredients", &card.ingredients)?;
            for (n, step) in card.steps.iter().enumerate() {
                writeln!(f, "  {}. {}", n + 1, step)?;
            }
        }
        Ok(())
    }
}
