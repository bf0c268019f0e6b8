//! Engine-level conversion failures
//!
//! These are the "invalid" outcomes of a conversion. They are plain values,
//! returned in the `Err` arm, and never abort the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a conversion could not produce a number
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    #[error("unknown unit '{unit}' for {category}")]
    UnknownUnit { unit: String, category: String },

    #[error("unit '{unit}' has a zero scale factor in {category}")]
    DegenerateFactor { unit: String, category: String },

    #[error("no temperature rule for {from} -> {to}")]
    UnsupportedTemperaturePair { from: String, to: String },

    #[error("value must be a finite number")]
    NonFiniteValue,

    #[error("result is out of range")]
    Overflow,

    #[error("unknown conversion type '{name}'")]
    UnknownCategory { name: String },
}

impl ConversionError {
    pub fn unknown_unit(unit: &str, category: &str) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }

    pub fn degenerate_factor(unit: &str, category: &str) -> Self {
        ConversionError::DegenerateFactor {
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }

    pub fn unsupported_temperature_pair(from: &str, to: &str) -> Self {
        ConversionError::UnsupportedTemperaturePair {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn unknown_category(name: &str) -> Self {
        ConversionError::UnknownCategory { name: name.to_string() }
    }
}

/// Outcome of a single conversion
pub type ConversionResult = Result<f64, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_unit() {
        let err = ConversionError::unknown_unit("Furlongs", "Length");
        assert_eq!(err.to_string(), "unknown unit 'Furlongs' for Length");
    }

    #[test]
    fn test_display_temperature_pair() {
        let err = ConversionError::unsupported_temperature_pair("Celsius", "Rankine");
        assert_eq!(err.to_string(), "no temperature rule for Celsius -> Rankine");
    }

    #[test]
    fn test_display_overflow() {
        assert_eq!(ConversionError::Overflow.to_string(), "result is out of range");
    }

    #[test]
    fn test_serialize_tagged() {
        let err = ConversionError::degenerate_factor("Meters", "Length");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "degenerate_factor");
        assert_eq!(json["unit"], "Meters");
    }
}
