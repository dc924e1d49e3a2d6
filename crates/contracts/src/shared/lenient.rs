//! Разбор целых количеств из ответов модели.
//!
//! Модель может вернуть `1199.5`, `-3` или `"800"` там, где ожидается
//! количество штук. Такие значения округляются и обрезаются до `0..=u32::MAX`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Округлить до неотрицательного целого
pub fn clamp_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u32::MAX as f64) as u32
}

/// `deserialize_with` для количеств: любое JSON-число, число в строке или `null` (0)
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null => Some(0.0),
        _ => None,
    };
    number
        .map(clamp_count)
        .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "count")]
        units: u32,
    }

    fn units(json: &str) -> Result<u32, serde_json::Error> {
        serde_json::from_str::<Row>(json).map(|r| r.units)
    }

    #[test]
    fn numbers_are_rounded_and_clamped() {
        assert_eq!(units(r#"{"units": 1200}"#).unwrap(), 1200);
        assert_eq!(units(r#"{"units": 1199.5}"#).unwrap(), 1200);
        assert_eq!(units(r#"{"units": 10.2}"#).unwrap(), 10);
        assert_eq!(units(r#"{"units": -1}"#).unwrap(), 0);
        assert_eq!(units(r#"{"units": 1e12}"#).unwrap(), u32::MAX);
    }

    #[test]
    fn strings_null_and_missing() {
        assert_eq!(units(r#"{"units": " 800 "}"#).unwrap(), 800);
        assert_eq!(units(r#"{"units": null}"#).unwrap(), 0);
        assert_eq!(units(r#"{}"#).unwrap(), 0);
        assert!(units(r#"{"units": "many"}"#).is_err());
        assert!(units(r#"{"units": [1]}"#).is_err());
    }
}
