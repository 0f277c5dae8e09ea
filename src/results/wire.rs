//! Lenient field decoders for model-produced JSON.
//!
//! Models follow the requested shape loosely: counts arrive as strings or floats,
//! amounts as numbers, arrays as `null`. These helpers absorb that drift so the
//! typed result only fails on genuinely missing or nonsensical data.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` decodes to the type's default instead of failing
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a JSON string or number, producing its text form
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Same as [`string_or_number`] but keeps absence and empty text as `None`
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = string_or_number(deserializer)?;
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}

/// Decode a non-negative count from an integer, a float (rounded), or a string that
/// starts with digits such as `"15 menit"`
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(serde::de::Error::custom)
            } else if let Some(v) = n
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.round() <= u32::MAX as f64)
            {
                Ok(v.round() as u32)
            } else {
                Err(serde::de::Error::custom(format!("invalid count {}", n)))
            }
        }
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                Ok(0)
            } else {
                digits.parse().map_err(serde::de::Error::custom)
            }
        }
        other => Err(serde::de::Error::custom(format!("expected a count, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "nullable")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "string_or_number")]
        amount: String,
        #[serde(default, deserialize_with = "optional_string_or_number")]
        unit: Option<String>,
        #[serde(default, deserialize_with = "lenient_count")]
        minutes: u32,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_null_array_becomes_empty() {
        assert!(probe(json!({"items": null})).items.is_empty());
        assert!(probe(json!({})).items.is_empty());
    }

    #[test]
    fn test_amount_accepts_number_and_string() {
        assert_eq!(probe(json!({"amount": 2})).amount, "2");
        assert_eq!(probe(json!({"amount": 0.5})).amount, "0.5");
        assert_eq!(probe(json!({"amount": "1/2"})).amount, "1/2");
    }

    #[test]
    fn test_empty_unit_is_none() {
        assert_eq!(probe(json!({"unit": ""})).unit, None);
        assert_eq!(probe(json!({"unit": "cup"})).unit, Some("cup".to_string()));
    }

    #[test]
    fn test_counts_from_various_shapes() {
        assert_eq!(probe(json!({"minutes": 15})).minutes, 15);
        assert_eq!(probe(json!({"minutes": 12.6})).minutes, 13);
        assert_eq!(probe(json!({"minutes": "20 menit"})).minutes, 20);
        assert_eq!(probe(json!({"minutes": "sebentar"})).minutes, 0);
        assert_eq!(probe(json!({"minutes": null})).minutes, 0);
    }

    #[test]
    fn test_float_count_beyond_u32_is_rejected() {
        let result: Result<Probe, _> = serde_json::from_value(json!({"minutes": 1e12}));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let result: Result<Probe, _> = serde_json::from_value(json!({"minutes": -3}));
        assert!(result.is_err());
    }
}
