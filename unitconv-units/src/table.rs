//! Category tables: unit name -> scale factor relative to a base unit

use serde::Serialize;

/// A named category of linearly related units.
///
/// Every factor is expressed relative to the category's base unit, whose
/// own factor is 1.0. Units are kept in their declared order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTable {
    pub name: &'static str,
    pub units: &'static [(&'static str, f64)],
}

impl CategoryTable {
    /// Scale factor of `unit`, if the table defines it
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// Unit names in declared order
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> {
        let units: &'static [(&'static str, f64)] = self.units;
        units.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

pub static LENGTH: CategoryTable = CategoryTable {
    name: "Length",
    units: &[
        ("Kilometers", 1000.0),
        ("Meters", 1.0),
        ("Centimeters", 0.01),
        ("Millimeters", 0.001),
        ("Miles", 1609.34),
        ("Yards", 0.9144),
        ("Feet", 0.3048),
        ("Inches", 0.0254),
    ],
};

pub static WEIGHT: CategoryTable = CategoryTable {
    name: "Weight",
    units: &[
        ("Kilograms", 1.0),
        ("Grams", 0.001),
        ("Milligrams", 0.000001),
        ("Pounds", 0.453592),
        ("Ounces", 0.0283495),
    ],
};

pub static VOLUME: CategoryTable = CategoryTable {
    name: "Volume",
    units: &[
        ("Liters", 1.0),
        ("Milliliters", 0.001),
        ("Cubic Meters", 1000.0),
        ("Gallons", 3.78541),
    ],
};

pub static TIME: CategoryTable = CategoryTable {
    name: "Time",
    units: &[
        ("Seconds", 1.0),
        ("Minutes", 60.0),
        ("Hours", 3600.0),
        ("Days", 86400.0),
    ],
};

/// All linear tables
pub static TABLES: [&CategoryTable; 4] = [&LENGTH, &WEIGHT, &VOLUME, &TIME];
