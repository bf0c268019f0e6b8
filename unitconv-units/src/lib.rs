//! unitconv Units - Category tables and conversion functions
//!
//! Flat, single-dimension conversions. Each linear category is a table of
//! scale factors relative to one base unit; temperature uses fixed affine
//! rules between its three scales.
//!
//! Categories:
//! - Length (Kilometers, Meters, Miles, Feet, ...)
//! - Weight (Kilograms, Grams, Pounds, Ounces, ...)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Volume (Liters, Milliliters, Cubic Meters, Gallons)
//! - Time (Seconds, Minutes, Hours, Days)

mod table;
mod linear;
mod temperature;
mod category;
mod request;

pub use table::{CategoryTable, LENGTH, WEIGHT, VOLUME, TIME, TABLES};
pub use linear::convert_linear;
pub use temperature::{TemperatureUnit, convert_temperature, apply_rule};
pub use category::Category;
pub use request::{ConversionRequest, convert};
pub use unitconv_core::{ConversionError, ConversionResult};
