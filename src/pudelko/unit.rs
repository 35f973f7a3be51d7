use crate::pudelko::error::PudelkoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of measure a box was constructed or displayed with.
/// Internal storage is always meters; the unit only drives input conversion and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Millimeter,
    Centimeter,
    #[default]
    Meter,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Millimeter, Unit::Centimeter, Unit::Meter];

    /// Symbol used in formatted output ("mm", "cm", "m")
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
        }
    }

    /// Look up a unit by its symbol
    pub fn from_symbol(symbol: &str) -> Result<Self, PudelkoError> {
        match symbol {
            "mm" => Ok(Unit::Millimeter),
            "cm" => Ok(Unit::Centimeter),
            "m" => Ok(Unit::Meter),
            other => Err(PudelkoError::InvalidUnit(other.to_string())),
        }
    }

    /// How many of this unit make up one meter
    pub fn per_meter(self) -> f64 {
        match self {
            Unit::Millimeter => 1000.0,
            Unit::Centimeter => 100.0,
            Unit::Meter => 1.0,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        value / self.per_meter()
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        meters * self.per_meter()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = PudelkoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_symbol(s.trim())
    }
}

impl TryFrom<String> for Unit {
    type Error = PudelkoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Unit::from_symbol(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_symbol(unit.symbol()).unwrap(), unit);
        }
    }

    #[test]
    fn test_conversion_to_meters() {
        assert_eq!(Unit::Millimeter.to_meters(1500.0), 1.5);
        assert_eq!(Unit::Centimeter.to_meters(250.0), 2.5);
        assert_eq!(Unit::Meter.to_meters(3.0), 3.0);
        assert_eq!(Unit::Centimeter.from_meters(2.5), 250.0);
    }

    #[test]
    fn test_unknown_symbol_is_invalid_unit() {
        let result = Unit::from_symbol("km");
        assert!(matches!(result, Err(PudelkoError::InvalidUnit(s)) if s == "km"));
        assert!("M".parse::<Unit>().is_err());
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&Unit::Centimeter).unwrap();
        assert_eq!(json, "\"cm\"");

        let unit: Unit = serde_json::from_str("\"mm\"").unwrap();
        assert_eq!(unit, Unit::Millimeter);

        let err = serde_json::from_str::<Unit>("\"inch\"").unwrap_err();
        assert!(err.to_string().contains("Invalid unit: inch"));
    }
}
