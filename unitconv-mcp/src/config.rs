//! Server configuration from the environment

use std::env;
use tracing::warn;

const DEFAULT_VALUE_DECIMALS: usize = 2;
const DEFAULT_RESULT_DECIMALS: usize = 6;
const MAX_DECIMALS: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Accept negative input for every category, not only Temperature
    pub allow_negative: bool,
    /// Decimals used when echoing the input value
    pub value_decimals: usize,
    /// Decimals used for the converted result
    pub result_decimals: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allow_negative: false,
            value_decimals: DEFAULT_VALUE_DECIMALS,
            result_decimals: DEFAULT_RESULT_DECIMALS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            allow_negative: lookup("UNITCONV_ALLOW_NEGATIVE")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.allow_negative),
            value_decimals: decimals(&lookup, "UNITCONV_VALUE_DECIMALS", defaults.value_decimals),
            result_decimals: decimals(&lookup, "UNITCONV_RESULT_DECIMALS", defaults.result_decimals),
        }
    }
}

fn decimals(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n <= MAX_DECIMALS => n,
        _ => {
            warn!(key, value = %raw, default, "ignoring invalid decimals setting");
            default
        }
    }
}
