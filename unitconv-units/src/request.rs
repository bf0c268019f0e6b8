//! Routing a conversion request to the right function

use serde::{Deserialize, Serialize};
use unitconv_core::{ConversionError, ConversionResult};
use crate::{convert_linear, convert_temperature, Category};

/// One conversion the user asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    #[serde(default)]
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(category: Category, value: f64, from_unit: &str, to_unit: &str) -> Self {
        ConversionRequest {
            category,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    /// Build a request from a category name as typed by a client
    pub fn parse(category: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<Self, ConversionError> {
        Ok(Self::new(category.parse()?, value, from_unit, to_unit))
    }

    pub fn convert(&self) -> ConversionResult {
        convert(self)
    }
}

/// Temperature goes to the affine rules, everything else through its table.
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    match request.category.table() {
        Some(table) => convert_linear(request.value, &request.from_unit, &request.to_unit, table),
        None => convert_temperature(request.value, &request.from_unit, &request.to_unit),
    }
}
