use crate::pudelko::error::PudelkoError;
use crate::pudelko::model::Pudelko;
use crate::pudelko::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the three dimensions in text form
pub const SEPARATOR: &str = " × ";

/// Output format for a box: which unit to print and with how many decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormatSpec {
    #[default]
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "mm")]
    Millimeter,
}

impl FormatSpec {
    pub fn unit(self) -> Unit {
        match self {
            FormatSpec::Meter => Unit::Meter,
            FormatSpec::Centimeter => Unit::Centimeter,
            FormatSpec::Millimeter => Unit::Millimeter,
        }
    }

    /// Decimal places printed for this unit
    pub fn precision(self) -> usize {
        match self {
            FormatSpec::Meter => 3,
            FormatSpec::Centimeter => 1,
            FormatSpec::Millimeter => 0,
        }
    }
}

impl From<Unit> for FormatSpec {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Meter => FormatSpec::Meter,
            Unit::Centimeter => FormatSpec::Centimeter,
            Unit::Millimeter => FormatSpec::Millimeter,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = PudelkoError;

    /// An empty spec means meters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "m" => Ok(FormatSpec::Meter),
            "cm" => Ok(FormatSpec::Centimeter),
            "mm" => Ok(FormatSpec::Millimeter),
            other => Err(PudelkoError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit().symbol())
    }
}

impl Pudelko {
    /// Format with a textual spec: `""`, `"m"`, `"cm"` or `"mm"`
    pub fn format(&self, spec: &str) -> Result<String, PudelkoError> {
        let spec: FormatSpec = spec.parse()?;
        Ok(self.format_with(spec))
    }

    pub fn format_with(&self, spec: FormatSpec) -> String {
        let unit = spec.unit();
        let precision = spec.precision();
        self.iter()
            .map(|meters| format!("{:.*} {}", precision, unit.from_meters(meters), unit))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl fmt::Display for Pudelko {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(FormatSpec::Meter))
    }
}
