//! Linear conversion through a category's base unit

use unitconv_core::{ConversionError, ConversionResult};
use crate::CategoryTable;

/// Convert `value` between two units of the same table.
///
/// `value * table[from] / table[to]`. Identical unit names return `value`
/// untouched, so no rounding is introduced by the trip through the base unit.
pub fn convert_linear(value: f64, from_unit: &str, to_unit: &str, table: &CategoryTable) -> ConversionResult {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteValue);
    }

    if from_unit == to_unit {
        return Ok(value);
    }

    let from_factor = table.factor(from_unit)
        .ok_or_else(|| ConversionError::unknown_unit(from_unit, table.name))?;
    let to_factor = table.factor(to_unit)
        .ok_or_else(|| ConversionError::unknown_unit(to_unit, table.name))?;

    if to_factor == 0.0 {
        return Err(ConversionError::degenerate_factor(to_unit, table.name));
    }

    let base = value * from_factor;
    let result = base / to_factor;
    if !result.is_finite() {
        return Err(ConversionError::Overflow);
    }
    Ok(result)
}
