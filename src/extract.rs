//! Pull a JSON object out of free-form model output.
//!
//! Models asked for "only JSON" still wrap it in prose or markdown fences. The primary
//! strategy is a greedy match from the first `{` to the last `}`. That span is wrong
//! when trailing prose contains a stray `}`, so a brace-balanced scan that understands
//! JSON strings is tried when the greedy span does not parse.

use crate::error::{IdentifyError, Result};
use crate::results::IdentificationResult;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON span pattern is valid"));

/// Greedy span from the first `{` to the last `}`, if both exist in that order
pub fn json_span(text: &str) -> Option<&str> {
    JSON_SPAN.find(text).map(|m| m.as_str())
}

/// First complete object starting at the first `{`, skipping braces inside strings
pub fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract, deserialize and validate a result, stamping it with the current time.
///
/// Text without any `{...}` span is handed to the parser whole, so it fails with a
/// [`IdentifyError::ParseError`] rather than producing a default.
pub fn parse_response<T: IdentificationResult>(text: &str) -> Result<T> {
    let candidate = json_span(text).unwrap_or(text);
    debug!("Extracted {} of {} response chars as JSON", candidate.len(), text.len());

    let mut result = match serde_json::from_str::<T>(candidate) {
        Ok(result) => result,
        Err(greedy_err) => match balanced_object(text).filter(|b| *b != candidate) {
            Some(balanced) => match serde_json::from_str::<T>(balanced) {
                Ok(result) => {
                    warn!("Greedy JSON span failed to parse ({}); used balanced object", greedy_err);
                    result
                }
                Err(_) => return Err(IdentifyError::ParseError(greedy_err.to_string())),
            },
            None => return Err(IdentifyError::ParseError(greedy_err.to_string())),
        },
    };

    result.validate()?;
    result.set_timestamp(Utc::now());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{mock_plant_identification, mock_recipe_identification};
    use crate::results::{PlantIdentificationResult, RecipeIdentificationResult};

    #[test]
    fn test_json_span_strips_prose() {
        let text = "Sure! Here is the analysis:\n{\"a\": {\"b\": 1}}\nHope this helps.";
        assert_eq!(json_span(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_json_span_strips_markdown_fence() {
        let text = "```json\n{\"confidence\": 0.5}\n```";
        assert_eq!(json_span(text), Some("{\"confidence\": 0.5}"));
    }

    #[test]
    fn test_json_span_is_greedy() {
        let text = "{\"a\": 1} and {\"b\": 2}";
        assert_eq!(json_span(text), Some(text));
    }

    #[test]
    fn test_json_span_none_without_braces() {
        assert_eq!(json_span("no json here"), None);
        assert_eq!(json_span("} backwards {"), None);
    }

    #[test]
    fn test_balanced_object_ignores_braces_in_strings() {
        let text = r#"prefix {"note": "use {curly} \"quotes\"", "n": {"x": 1}} trailing }"#;
        assert_eq!(
            balanced_object(text),
            Some(r#"{"note": "use {curly} \"quotes\"", "n": {"x": 1}}"#)
        );
    }

    #[test]
    fn test_balanced_object_unterminated() {
        assert_eq!(balanced_object("{\"a\": 1"), None);
    }

    #[test]
    fn test_text_without_brace_is_parse_error() {
        let result = parse_response::<PlantIdentificationResult>("I could not identify this plant.");
        assert!(matches!(result, Err(IdentifyError::ParseError(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = parse_response::<RecipeIdentificationResult>("{\"confidence\": }");
        assert!(matches!(result, Err(IdentifyError::ParseError(_))));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let result = parse_response::<PlantIdentificationResult>("{\"foo\": \"bar\"}");
        assert!(matches!(result, Err(IdentifyError::ParseError(_))));
    }

    #[test]
    fn test_invalid_values_are_validation_error() {
        let text = r#"{"plant": {"name": "Mint"}, "confidence": 3.5}"#;
        let result = parse_response::<PlantIdentificationResult>(text);
        assert!(matches!(result, Err(IdentifyError::ValidationError(_))));
    }

    #[test]
    fn test_trailing_brace_in_prose_falls_back_to_balanced_object() {
        let text = r#"{"plant": {"name": "Mint"}, "confidence": 0.6} (format: {json})"#;
        let result = parse_response::<PlantIdentificationResult>(text).unwrap();
        assert_eq!(result.plant.name, "Mint");
    }

    #[test]
    fn test_parse_stamps_current_time() {
        let before = Utc::now();
        let result =
            parse_response::<PlantIdentificationResult>(r#"{"plant": {"name": "Mint"}, "confidence": 0.6, "timestamp": "2001-01-01T00:00:00Z"}"#)
                .unwrap();
        assert!(result.timestamp >= before);
    }

    #[test]
    fn test_plant_round_trip_through_extractor() {
        let original = mock_plant_identification();
        let text = format!(
            "Berikut hasil analisis:\n```json\n{}\n```\nSemoga membantu.",
            serde_json::to_string_pretty(&original).unwrap()
        );

        let mut parsed = parse_response::<PlantIdentificationResult>(&text).unwrap();
        parsed.timestamp = original.timestamp;

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_recipe_round_trip_through_extractor() {
        let original = mock_recipe_identification();
        let text = format!("Here you go: {}", serde_json::to_string(&original).unwrap());

        let mut parsed = parse_response::<RecipeIdentificationResult>(&text).unwrap();
        parsed.timestamp = original.timestamp;

        assert_eq!(parsed, original);
    }
}
