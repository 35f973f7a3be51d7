use crate::pudelko::error::PudelkoError;
use crate::pudelko::model::Pudelko;
use crate::pudelko::unit::Unit;
use std::str::FromStr;

/// Character separating the dimensions in text form
pub const MULTIPLICATION_SIGN: char = '×';

/// Parse one `"<number> <unit>"` segment into meters
fn parse_segment(segment: &str) -> Result<f64, PudelkoError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let [number, symbol] = tokens.as_slice() else {
        return Err(PudelkoError::FormatError(format!(
            "expected '<value> <unit>', got '{}'",
            segment.trim()
        )));
    };

    // f64::from_str always uses '.' as the decimal separator
    let value = number
        .parse::<f64>()
        .map_err(|e| PudelkoError::FormatError(format!("invalid number '{}': {}", number, e)))?;

    let unit = Unit::from_symbol(symbol)
        .map_err(|_| PudelkoError::FormatError(format!("unknown unit '{}'", symbol)))?;

    Ok(unit.to_meters(value))
}

impl Pudelko {
    /// Parse the text form produced by [`Pudelko::format`], e.g. `"1.000 m × 2.000 m × 3.000 m"`.
    ///
    /// Each segment carries its own unit, so mixed input such as `"1 m × 20 cm × 300 mm"` is
    /// accepted. The result is always tagged with meters and goes through the usual validation.
    pub fn parse(input: &str) -> Result<Pudelko, PudelkoError> {
        if input.trim().is_empty() {
            return Err(PudelkoError::FormatError(
                "input cannot be empty".to_string(),
            ));
        }

        let segments: Vec<&str> = input
            .split(MULTIPLICATION_SIGN)
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.len() != 3 {
            return Err(PudelkoError::FormatError(format!(
                "expected 3 dimensions separated by '{}', got {}",
                MULTIPLICATION_SIGN,
                segments.len()
            )));
        }

        let mut meters = [0.0; 3];
        for (slot, segment) in meters.iter_mut().zip(segments) {
            *slot = parse_segment(segment)?;
        }

        log::debug!("parsed '{}' as {:?} m", input, meters);

        Pudelko::new(meters[0], meters[1], meters[2], Unit::Meter)
    }
}

impl FromStr for Pudelko {
    type Err = PudelkoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pudelko::parse(s)
    }
}
