//! unitconv Core - Fundamental types
//!
//! This crate provides the types shared across unitconv:
//! - `ConversionError`: why a conversion produced no number
//! - `ConvError`: structured errors for tool clients

mod conversion;
mod error;

pub use conversion::{ConversionError, ConversionResult};
pub use error::{ConvError, Severity, codes};
