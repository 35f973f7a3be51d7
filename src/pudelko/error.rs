use std::fmt;
use thiserror::Error;

/// Which of the three box dimensions a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    A,
    B,
    C,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::A, Dimension::B, Dimension::C];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::A => write!(f, "a"),
            Dimension::B => write!(f, "b"),
            Dimension::C => write!(f, "c"),
        }
    }
}

/// The bound a dimension violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionBound {
    /// Value (after conversion and rounding) is zero or negative
    NotPositive,
    /// Value exceeds the 10 m limit
    TooLarge,
    /// NaN or infinite
    NotFinite,
}

impl fmt::Display for DimensionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionBound::NotPositive => write!(f, "must be greater than 0 m"),
            DimensionBound::TooLarge => write!(f, "must not exceed 10 m"),
            DimensionBound::NotFinite => write!(f, "must be a finite number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PudelkoError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid dimension {dimension} = {value} m: {bound}")]
    InvalidDimension {
        dimension: Dimension,
        value: f64,
        bound: DimensionBound,
    },

    #[error("Unsupported format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Index out of range: {0} (expected 0, 1 or 2)")]
    IndexOutOfRange(usize),
}
