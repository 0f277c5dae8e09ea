use crate::error::{IdentifyError, Result};
use crate::prompts::IdentificationKind;
use crate::results::wire::{nullable, optional_string_or_number};
use crate::results::{check_confidence, IdentificationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How serious a detected disease is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl FromStr for Severity {
    type Err = String;

    // The plant prompt asks for "rendah, sedang, tinggi"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "rendah" | "ringan" => Ok(Severity::Low),
            "medium" | "moderate" | "sedang" | "menengah" => Ok(Severity::Medium),
            "high" | "severe" | "tinggi" | "berat" => Ok(Severity::High),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowingConditions {
    pub light: String,
    pub water: String,
    pub soil: String,
    pub temperature: String,
    pub humidity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareGuide {
    pub watering: String,
    pub fertilizing: String,
    pub pruning: String,
    pub repotting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDisease {
    pub name: String,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub symptoms: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub causes: Vec<String>,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub development_stage: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub potential_impact: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub treatments: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub organic_solutions: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub chemical_solutions: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub preventions: Vec<String>,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub spread_risk: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub treatment_schedule: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub recommended_products: Vec<String>,
    pub severity: Severity,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub diagnostic_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub scientific_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growing_conditions: Option<GrowingConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_guide: Option<CareGuide>,
    #[serde(default, deserialize_with = "nullable")]
    pub fun_facts: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub diseases: Vec<PlantDisease>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantAnalysis {
    #[serde(default, deserialize_with = "nullable")]
    pub overall_health: String,
    #[serde(default)]
    pub issues_identified: bool,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub growth_stage: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number", skip_serializing_if = "Option::is_none")]
    pub estimated_age: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub recommended_actions: Vec<String>,
}

/// Plant diagnosis derived from one model response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantIdentificationResult {
    pub plant: Plant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<PlantAnalysis>,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_disease: Option<PlantDisease>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl PlantIdentificationResult {
    /// True when the model reported a disease or flagged health issues
    pub fn has_issues(&self) -> bool {
        self.detected_disease.is_some()
            || self.analysis.as_ref().is_some_and(|a| a.issues_identified)
    }
}

impl IdentificationResult for PlantIdentificationResult {
    const KIND: IdentificationKind = IdentificationKind::Plant;

    fn validate(&self) -> Result<()> {
        if self.plant.name.trim().is_empty() {
            return Err(IdentifyError::ValidationError("plant name is empty".to_string()));
        }
        if let Some(disease) = &self.detected_disease {
            if disease.name.trim().is_empty() {
                return Err(IdentifyError::ValidationError(
                    "detected disease has no name".to_string(),
                ));
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

    fn minimal() -> serde_json::Value {
        json!({
            "plant": {"name": "Cabai", "scientificName": "Capsicum annuum", "description": "Tanaman cabai"},
            "confidence": 0.8
        })
    }

    #[test]
    fn test_severity_accepts_english_and_indonesian() {
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
        assert_eq!("Sedang".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!(" TINGGI ".parse::<Severity>().unwrap(), Severity::High);
        assert!("unknown".parse::<Severity>().is_err());
    }

    #[test]
    fn test_empty_severity_placeholder_is_parse_error() {
        let text = r#"{"plant": {"name": "Cabai"}, "confidence": 0.8,
            "detectedDisease": {"name": "Antraknosa", "severity": ""}}"#;

        let result = crate::extract::parse_response::<PlantIdentificationResult>(text);

        match result {
            Err(IdentifyError::ParseError(msg)) => assert!(msg.contains("unknown severity")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::from_str::<Severity>("\"rendah\"").unwrap(), Severity::Low);
    }

    #[test]
    fn test_minimal_result_deserializes() {
        let result: PlantIdentificationResult = serde_json::from_value(minimal()).unwrap();

        assert_eq!(result.plant.name, "Cabai");
        assert!(result.analysis.is_none());
        assert!(result.detected_disease.is_none());
        assert!(result.plant.fun_facts.is_empty());
        assert!(!result.has_issues());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_null_detected_disease_is_none() {
        let mut value = minimal();
        value["detectedDisease"] = serde_json::Value::Null;
        value["analysis"] = json!({"overallHealth": "Good", "issuesIdentified": false, "recommendedActions": null});

        let result: PlantIdentificationResult = serde_json::from_value(value).unwrap();

        assert!(result.detected_disease.is_none());
        assert_eq!(result.analysis.unwrap().recommended_actions, Vec::<String>::new());
    }

    #[test]
    fn test_detected_disease_fields() {
        let mut value = minimal();
        value["detectedDisease"] = json!({
            "name": "Antraknosa",
            "description": "Bercak hitam pada buah",
            "symptoms": ["bercak"],
            "causes": ["jamur"],
            "treatments": ["fungisida"],
            "preventions": [],
            "severity": "tinggi",
            "spreadRisk": ""
        });

        let result: PlantIdentificationResult = serde_json::from_value(value).unwrap();
        let disease = result.detected_disease.as_ref().unwrap();

        assert_eq!(disease.severity, Severity::High);
        assert_eq!(disease.spread_risk, None);
        assert!(result.has_issues());
    }

    #[test]
    fn test_missing_plant_is_error() {
        let result: std::result::Result<PlantIdentificationResult, _> =
            serde_json::from_value(json!({"confidence": 0.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut result: PlantIdentificationResult = serde_json::from_value(minimal()).unwrap();
        result.confidence = 92.0;
        assert!(matches!(result.validate(), Err(IdentifyError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut result: PlantIdentificationResult = serde_json::from_value(minimal()).unwrap();
        result.plant.name = "  ".to_string();
        assert!(result.validate().is_err());
    }
}
