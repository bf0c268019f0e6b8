//! Temperature conversions
//!
//! Temperature scales do not share a zero point, so they cannot live in a
//! `CategoryTable`. Each ordered pair of scales has its own affine formula.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use unitconv_core::{ConversionError, ConversionResult};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// The three supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All scales in menu order
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Look up a scale by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.name() == name)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConversionError::unknown_unit(s, "Temperature"))
    }
}

/// Apply the rule for an ordered pair of distinct scales.
///
/// Returns `None` for `from == to`: identical scales are not part of the rule set.
pub fn apply_rule(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Option<f64> {
    use TemperatureUnit::*;

    let x = value;
    let converted = match (from, to) {
        (Celsius, Fahrenheit) => x * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Kelvin) => x + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (x - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (x - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => x - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (x - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => return None,
    };
    Some(converted)
}

/// Convert a temperature between two named scales.
///
/// Values below absolute zero are converted like any other value.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteValue);
    }

    if from_unit == to_unit {
        return Ok(value);
    }

    let pair = TemperatureUnit::from_name(from_unit).zip(TemperatureUnit::from_name(to_unit));
    let result = pair.and_then(|(from, to)| apply_rule(value, from, to))
        .ok_or_else(|| ConversionError::unsupported_temperature_pair(from_unit, to_unit))?;
    if !result.is_finite() {
        return Err(ConversionError::Overflow);
    }
    Ok(result)
}
