use std::fmt;

use fraction::Fraction;

/// Measurement family a unit belongs to. Quantities only merge within one family.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitFamily {
    Volume,
    Mass,
    Count,
    /// Unrecognized unit, only compatible with the same literal unit.
    Other(String),
}

impl UnitFamily {
    pub fn canonical_unit(&self) -> &str {
        match self {
            UnitFamily::Volume => "ml",
            UnitFamily::Mass => "g",
            UnitFamily::Count => "piece",
            UnitFamily::Other(unit) => unit,
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitFamily::Volume => f.write_str("volume"),
            UnitFamily::Mass => f.write_str("mass"),
            UnitFamily::Count => f.write_str("count"),
            UnitFamily::Other(unit) => write!(f, "other:{unit}"),
        }
    }
}

/// A recognized unit: its display spelling, family and size in canonical units.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub label: Option<String>,
    pub family: UnitFamily,
    pub factor: Fraction,
}

impl Unit {
    /// `factor` is `numer / denom` canonical units, 29.57 ml being `(2957, 100)`.
    fn known(label: &str, family: UnitFamily, (numer, denom): (u64, u64)) -> Self {
        Self {
            label: Some(label.to_owned()),
            family,
            factor: Fraction::new(numer, denom),
        }
    }

    /// Parse a free-form unit. Missing or blank units count as pieces.
    pub fn parse(unit: Option<&str>) -> Self {
        let raw = unit
            .map(|u| {
                u.split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase()
            })
            .unwrap_or_default();
        let normalized = raw.trim_end_matches('.');

        match normalized {
            "" => Self {
                label: None,
                family: UnitFamily::Count,
                factor: Fraction::new(1u64, 1u64),
            },
            "tsp" | "teaspoon" | "teaspoons" => Self::known("tsp", UnitFamily::Volume, (5, 1)),
            "tbsp" | "tbs" | "tbl" | "tablespoon" | "tablespoons" => {
                Self::known("tbsp", UnitFamily::Volume, (15, 1))
            }
            "cup" | "cups" => Self::known("cup", UnitFamily::Volume, (240, 1)),
            "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => {
                Self::known("fl oz", UnitFamily::Volume, (2957, 100))
            }
            "pint" | "pints" | "pt" => Self::known("pint", UnitFamily::Volume, (47318, 100)),
            "quart" | "quarts" | "qt" => Self::known("quart", UnitFamily::Volume, (94635, 100)),
            "l" | "liter" | "liters" | "litre" | "litres" => {
                Self::known("l", UnitFamily::Volume, (1000, 1))
            }
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Self::known("ml", UnitFamily::Volume, (1, 1))
            }
            "g" | "gr" | "gram" | "grams" => Self::known("g", UnitFamily::Mass, (1, 1)),
            "kg" | "kilogram" | "kilograms" => Self::known("kg", UnitFamily::Mass, (1000, 1)),
            "oz" | "ounce" | "ounces" => Self::known("oz", UnitFamily::Mass, (2835, 100)),
            "lb" | "lbs" | "pound" | "pounds" => Self::known("lb", UnitFamily::Mass, (45359, 100)),
            "piece" | "pieces" | "pc" | "pcs" => Self::known("piece", UnitFamily::Count, (1, 1)),
            "whole" => Self::known("whole", UnitFamily::Count, (1, 1)),
            "clove" | "cloves" => Self::known("clove", UnitFamily::Count, (1, 1)),
            "item" | "items" => Self::known("item", UnitFamily::Count, (1, 1)),
            other => Self::known(other, UnitFamily::Other(other.to_owned()), (1, 1)),
        }
    }

    pub fn to_canonical(&self, quantity: Fraction) -> Fraction {
        quantity * self.factor
    }

    pub fn from_canonical(&self, quantity: Fraction) -> Fraction {
        quantity / self.factor
    }
}
