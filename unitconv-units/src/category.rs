//! Conversion categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use unitconv_core::ConversionError;
use crate::table::{CategoryTable, LENGTH, TIME, VOLUME, WEIGHT};
use crate::TemperatureUnit;

/// A conversion type the user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Time,
    ];

    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Time => "Time",
        }
    }

    /// Linear table backing this category; `None` for Temperature
    pub fn table(&self) -> Option<&'static CategoryTable> {
        match self {
            Category::Length => Some(&LENGTH),
            Category::Weight => Some(&WEIGHT),
            Category::Volume => Some(&VOLUME),
            Category::Time => Some(&TIME),
            Category::Temperature => None,
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, Category::Temperature)
    }

    /// Whether negative input makes sense for this category
    pub fn allows_negative(&self) -> bool {
        self.is_temperature()
    }

    /// Unit names offered for this category, in menu order
    pub fn units(&self) -> Vec<&'static str> {
        match self.table() {
            Some(table) => table.unit_names().collect(),
            None => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConversionError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let names: Vec<_> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Length", "Weight", "Temperature", "Volume", "Time"]);
    }

    #[test]
    fn test_temperature_has_no_table() {
        assert!(Category::Temperature.table().is_none());
        assert_eq!(Category::Temperature.units(), ["Celsius", "Fahrenheit", "Kelvin"]);
    }

    #[test]
    fn test_units_from_table() {
        assert_eq!(Category::Time.units(), ["Seconds", "Minutes", "Hours", "Days"]);
        assert_eq!(Category::Volume.units()[2], "Cubic Meters");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!(" TEMPERATURE ".parse::<Category>(), Ok(Category::Temperature));
        assert_eq!(
            "Speed".parse::<Category>(),
            Err(ConversionError::unknown_category("Speed"))
        );
    }

    #[test]
    fn test_negative_policy() {
        assert!(Category::Temperature.allows_negative());
        assert!(!Category::Length.allows_negative());
    }
}
