//! Structured errors for tool clients
//!
//! Errors never crash the server. Every failed conversion becomes one of
//! these, carrying a machine-readable code and a hint for the caller.

use crate::ConversionError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const DEGENERATE_FACTOR: &str = "DEGENERATE_FACTOR";
    pub const UNSUPPORTED_TEMPERATURE_PAIR: &str = "UNSUPPORTED_TEMPERATURE_PAIR";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const NEGATIVE_VALUE: &str = "NEGATIVE_VALUE";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The request was answered with a degraded result
    Warning,
    /// The request produced no result
    Error,
    /// The server cannot continue
    Fatal,
}

/// Structured error returned to tool clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl ConvError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{}: missing argument '{}'", tool, arg))
            .with_suggestion("Use tools/list to see the expected arguments")
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(codes::ARG_TYPE, format!("{}: argument '{}' must be {}", tool, arg, expected))
    }

    pub fn negative_value(category: &str) -> Self {
        Self::new(codes::NEGATIVE_VALUE, format!("{} values cannot be negative", category))
            .with_suggestion("Enter a value of 0 or more")
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for ConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvError {}

impl From<ConversionError> for ConvError {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::UnknownUnit { category, .. } => {
                Self::new(codes::UNKNOWN_UNIT, message)
                    .with_suggestion(format!("Use list_units for the units of {}", category))
            }
            ConversionError::DegenerateFactor { .. } => Self::new(codes::DEGENERATE_FACTOR, message),
            ConversionError::UnsupportedTemperaturePair { .. } => {
                Self::new(codes::UNSUPPORTED_TEMPERATURE_PAIR, message)
                    .with_suggestion("Temperature units are Celsius, Fahrenheit and Kelvin")
            }
            ConversionError::NonFiniteValue => Self::new(codes::NON_FINITE, message),
            ConversionError::Overflow => {
                Self::new(codes::OVERFLOW, message)
                    .with_suggestion("Use a smaller value or a closer unit")
            }
            ConversionError::UnknownCategory { .. } => {
                Self::new(codes::UNKNOWN_CATEGORY, message)
                    .with_suggestion("Use list_categories for the available conversion types")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unknown_unit() {
        let err: ConvError = ConversionError::unknown_unit("Furlongs", "Length").into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert!(err.message.contains("Furlongs"));
        assert!(err.suggestion.as_deref().unwrap().contains("Length"));
        assert_eq!(err.severity, Severity::Error);
    }

    #[test]
    fn test_display_with_suggestion() {
        let err = ConvError::negative_value("Length");
        assert_eq!(
            err.to_string(),
            "[NEGATIVE_VALUE] Length values cannot be negative (suggestion: Enter a value of 0 or more)"
        );
    }

    #[test]
    fn test_internal_is_fatal() {
        assert_eq!(ConvError::internal("boom").severity, Severity::Fatal);
    }

    #[test]
    fn test_from_overflow() {
        let err = ConvError::from(ConversionError::Overflow);
        assert_eq!(err.code, codes::OVERFLOW);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_serialize_skips_empty_suggestion() {
        let err = ConvError::from(ConversionError::NonFiniteValue);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NON_FINITE");
        assert_eq!(json["severity"], "error");
        assert!(json.get("suggestion").is_none());
    }
}
