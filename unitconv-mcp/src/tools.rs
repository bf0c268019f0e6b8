//! Tool handlers
//!
//! Tool failures caused by a bad conversion are reported in-band with
//! `isError: true`. Malformed arguments are protocol errors.

use serde_json::{json, Value as JsonValue};
use tracing::debug;
use unitconv_core::ConvError;
use unitconv_units::{Category, ConversionRequest};

use crate::config::ServerConfig;
use crate::format::format_conversion;
use crate::protocol::McpError;

const INVALID_CONVERSION: &str = "Invalid conversion! Please check the selected units.";

pub fn tool_definitions() -> JsonValue {
    let categories: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same conversion type.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "conversion_type": {
                            "type": "string",
                            "description": "Conversion type",
                            "enum": categories
                        },
                        "value": {
                            "type": "number",
                            "description": "Value to convert (default: 0). Only Temperature accepts negative values.",
                            "default": 0.0
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit, e.g. \"Kilometers\""
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit, e.g. \"Miles\""
                        }
                    },
                    "required": ["conversion_type", "from_unit", "to_unit"]
                }
            },
            {
                "name": "list_categories",
                "description": "List conversion types with their units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of one conversion type.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "conversion_type": {
                            "type": "string",
                            "description": "Conversion type",
                            "enum": categories
                        }
                    },
                    "required": ["conversion_type"]
                }
            }
        ]
    })
}

pub fn tool_convert(config: &ServerConfig, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category_name = required_text(args, "convert", "conversion_type")?;
    let from_unit = required_text(args, "convert", "from_unit")?;
    let to_unit = required_text(args, "convert", "to_unit")?;
    // -0.0 becomes 0.0
    let value = optional_number(args, "convert", "value")?.unwrap_or(0.0) + 0.0;

    let request = match ConversionRequest::parse(category_name, value, from_unit, to_unit) {
        Ok(r) => r,
        Err(e) => return Ok(invalid(ConvError::from(e))),
    };

    if value < 0.0 && !config.allow_negative && !request.category.allows_negative() {
        return Ok(invalid(ConvError::negative_value(request.category.name())));
    }

    debug!(
        category = %request.category,
        value,
        from = %request.from_unit,
        to = %request.to_unit,
        "converting"
    );

    match request.convert() {
        Ok(result) => {
            let text = format_conversion(
                value,
                &request.from_unit,
                result,
                &request.to_unit,
                config.value_decimals,
                config.result_decimals,
            );
            Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "result": result,
                "isError": false
            }))
        }
        Err(e) => Ok(invalid(ConvError::from(e))),
    }
}

pub fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories: Vec<JsonValue> = Category::all().iter()
        .map(|c| json!({ "name": c.name(), "units": c.units() }))
        .collect();

    let text = Category::all().iter()
        .map(|c| format!("- {}: {}", c.name(), c.units().join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "categories": categories,
        "isError": false
    }))
}

pub fn tool_list_units(args: &JsonValue) -> Result<JsonValue, McpError> {
    let name = required_text(args, "list_units", "conversion_type")?;
    let category: Category = match name.parse() {
        Ok(c) => c,
        Err(e) => return Ok(invalid(ConvError::from(e))),
    };
    let units = category.units();

    Ok(json!({
        "content": [{ "type": "text", "text": units.join(", ") }],
        "conversion_type": category.name(),
        "units": units,
        "isError": false
    }))
}

/// In-band failure: the user-facing message plus the structured error
fn invalid(err: ConvError) -> JsonValue {
    debug!(code = %err.code, "conversion rejected");
    json!({
        "content": [{ "type": "text", "text": format!("{} {}", INVALID_CONVERSION, err.message) }],
        "error": err,
        "isError": true
    })
}

fn required_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<&'a str, McpError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(McpError::invalid_params(ConvError::arg_missing(tool, arg))),
        Some(v) => v.as_str()
            .ok_or_else(|| McpError::invalid_params(ConvError::arg_type(tool, arg, "a string"))),
    }
}

/// Numbers may arrive as JSON numbers or numeric strings
fn optional_number(args: &JsonValue, tool: &str, arg: &str) -> Result<Option<f64>, McpError> {
    let parsed = match args.get(arg) {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(McpError::invalid_params(ConvError::arg_type(tool, arg, "a finite number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(args: JsonValue) -> JsonValue {
        tool_convert(&ServerConfig::default(), &args).unwrap()
    }

    fn text(result: &JsonValue) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn test_convert_length() {
        let result = convert(json!({
            "conversion_type": "Length",
            "value": 5,
            "from_unit": "Kilometers",
            "to_unit": "Meters"
        }));
        assert_eq!(result["isError"], false);
        assert_eq!(result["result"], 5000.0);
        assert_eq!(text(&result), "5.00 Kilometers = 5,000.000000 Meters");
    }

    #[test]
    fn test_convert_temperature_negative_allowed() {
        let result = convert(json!({
            "conversion_type": "Temperature",
            "value": -40,
            "from_unit": "Celsius",
            "to_unit": "Fahrenheit"
        }));
        assert_eq!(result["isError"], false);
        assert_eq!(text(&result), "-40.00 Celsius = -40.000000 Fahrenheit");
    }

    #[test]
    fn test_convert_negative_length_rejected() {
        let result = convert(json!({
            "conversion_type": "Length",
            "value": -1,
            "from_unit": "Meters",
            "to_unit": "Feet"
        }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "NEGATIVE_VALUE");
        assert!(result.get("result").is_none());
    }

    #[test]
    fn test_convert_negative_allowed_by_config() {
        let config = ServerConfig { allow_negative: true, ..ServerConfig::default() };
        let args = json!({
            "conversion_type": "Time",
            "value": -2,
            "from_unit": "Days",
            "to_unit": "Hours"
        });
        let result = tool_convert(&config, &args).unwrap();
        assert_eq!(result["result"], -48.0);
    }

    #[test]
    fn test_convert_negative_zero_is_zero() {
        let result = convert(json!({
            "conversion_type": "Length",
            "value": -0.0,
            "from_unit": "Meters",
            "to_unit": "Feet"
        }));
        assert_eq!(result["isError"], false);
        assert_eq!(text(&result), "0.00 Meters = 0.000000 Feet");
    }

    #[test]
    fn test_convert_overflow_is_invalid() {
        let result = convert(json!({
            "conversion_type": "Length",
            "value": 1.7e308,
            "from_unit": "Kilometers",
            "to_unit": "Meters"
        }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "OVERFLOW");
        assert!(result.get("result").is_none());
        assert!(text(&result).starts_with(INVALID_CONVERSION));
    }

    #[test]
    fn test_convert_value_defaults_to_zero() {
        let result = convert(json!({
            "conversion_type": "Temperature",
            "from_unit": "Celsius",
            "to_unit": "Kelvin"
        }));
        assert_eq!(text(&result), "0.00 Celsius = 273.150000 Kelvin");
    }

    #[test]
    fn test_convert_value_as_string() {
        let result = convert(json!({
            "conversion_type": "time",
            "value": "1",
            "from_unit": "Days",
            "to_unit": "Hours"
        }));
        assert_eq!(result["result"], 24.0);
    }

    #[test]
    fn test_convert_unknown_unit() {
        let result = convert(json!({
            "conversion_type": "Length",
            "value": 1,
            "from_unit": "Meters",
            "to_unit": "Furlongs"
        }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "UNKNOWN_UNIT");
        assert!(text(&result).starts_with(INVALID_CONVERSION));
        assert!(text(&result).contains("Furlongs"));
    }

    #[test]
    fn test_convert_unknown_category() {
        let result = convert(json!({
            "conversion_type": "Speed",
            "from_unit": "a",
            "to_unit": "b"
        }));
        assert_eq!(result["error"]["code"], "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_convert_missing_argument() {
        let err = tool_convert(&ServerConfig::default(), &json!({ "conversion_type": "Length" })).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_convert_bad_value_type() {
        let err = tool_convert(&ServerConfig::default(), &json!({
            "conversion_type": "Length",
            "value": "lots",
            "from_unit": "Meters",
            "to_unit": "Feet"
        })).unwrap_err();
        assert_eq!(err.code, -32602);
        assert_eq!(err.data.unwrap()["code"], "ARG_TYPE");
    }

    #[test]
    fn test_list_categories() {
        let result = tool_list_categories().unwrap();
        let categories = result["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[2]["name"], "Temperature");
        assert_eq!(categories[3]["units"][2], "Cubic Meters");
    }

    #[test]
    fn test_list_units() {
        let result = tool_list_units(&json!({ "conversion_type": "weight" })).unwrap();
        assert_eq!(result["conversion_type"], "Weight");
        assert_eq!(text(&result), "Kilograms, Grams, Milligrams, Pounds, Ounces");
    }

    #[test]
    fn test_tool_definitions_names() {
        let defs = tool_definitions();
        let names: Vec<_> = defs["tools"].as_array().unwrap().iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["convert", "list_categories", "list_units"]);
    }
}
