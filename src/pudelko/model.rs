use crate::pudelko::error::{Dimension, DimensionBound, PudelkoError};
use crate::pudelko::unit::Unit;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index};

/// Largest allowed dimension, in meters
pub const MAX_DIMENSION: f64 = 10.0;

/// Dimension used for any side the caller leaves out, in meters
pub const DEFAULT_DIMENSION: f64 = 0.1;

/// Slack for float noise before rounding (e.g. 3.3 + 6.7)
const UPPER_BOUND_TOLERANCE: f64 = 1e-9;

/// Round to a fixed number of decimal places (half away from zero)
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn check_bounds(dimension: Dimension, value: f64, tolerance: f64) -> Result<(), PudelkoError> {
    let bound = if !value.is_finite() {
        DimensionBound::NotFinite
    } else if value <= 0.0 {
        DimensionBound::NotPositive
    } else if value > MAX_DIMENSION + tolerance {
        DimensionBound::TooLarge
    } else {
        return Ok(());
    };

    Err(PudelkoError::InvalidDimension {
        dimension,
        value,
        bound,
    })
}

/// Validate a meter value, round it to millimeters and validate the result again.
/// The first check rejects inputs like 10.0001 m that rounding would pull back in range,
/// the second rejects inputs like 0.0004 m that round down to zero.
fn normalize(dimension: Dimension, meters: f64) -> Result<f64, PudelkoError> {
    check_bounds(dimension, meters, UPPER_BOUND_TOLERANCE)?;
    let rounded = round_to(meters, 3);
    check_bounds(dimension, rounded, 0.0)?;
    Ok(rounded)
}

/// An immutable rectangular box.
///
/// Dimensions are stored in meters, rounded to whole millimeters, each in `(0, 10]`.
/// The unit is only remembered for display.
///
/// Equality ignores which side is labelled a, b or c: `(1, 2, 3)` equals `(3, 1, 2)`.
/// Addition does NOT follow that rule, it adds side by side
/// (`a + a`, `b + b`, `c + c`) without matching sides by size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "PudelkoRecord", into = "PudelkoRecord")]
pub struct Pudelko {
    dims: [f64; 3],
    unit: Unit,
}

impl Pudelko {
    /// Create a box from three dimensions expressed in `unit`
    pub fn new(a: f64, b: f64, c: f64, unit: Unit) -> Result<Self, PudelkoError> {
        Self::from_meters(
            [unit.to_meters(a), unit.to_meters(b), unit.to_meters(c)],
            unit,
        )
    }

    /// Start a builder; omitted sides default to 0.1 m
    pub fn builder() -> PudelkoBuilder {
        PudelkoBuilder::default()
    }

    /// Build from a millimeter triple, e.g. `(1000, 2000, 3000)` is 1 m × 2 m × 3 m.
    /// The resulting box is tagged with meters.
    pub fn from_millimeter_triple(a: i32, b: i32, c: i32) -> Result<Self, PudelkoError> {
        Self::new(
            f64::from(a) / 1000.0,
            f64::from(b) / 1000.0,
            f64::from(c) / 1000.0,
            Unit::Meter,
        )
    }

    pub(crate) fn from_meters(meters: [f64; 3], unit: Unit) -> Result<Self, PudelkoError> {
        let mut dims = [0.0; 3];
        for ((slot, value), dimension) in dims.iter_mut().zip(meters).zip(Dimension::ALL) {
            *slot = normalize(dimension, value)?;
        }

        log::debug!(
            "constructed box {} m × {} m × {} m ({})",
            dims[0],
            dims[1],
            dims[2],
            unit
        );

        Ok(Self { dims, unit })
    }

    pub fn a(&self) -> f64 {
        round_to(self.dims[0], 3)
    }

    pub fn b(&self) -> f64 {
        round_to(self.dims[1], 3)
    }

    pub fn c(&self) -> f64 {
        round_to(self.dims[2], 3)
    }

    /// Unit the box was constructed with
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Volume in cubic meters, rounded to 9 decimal places
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.dims;
        round_to(a * b * c, 9)
    }

    /// Surface area in square meters, rounded to 6 decimal places
    pub fn surface_area(&self) -> f64 {
        let [a, b, c] = self.dims;
        round_to(2.0 * (a * b + b * c + a * c), 6)
    }

    /// Total length of all twelve edges, in meters
    pub fn edge_sum(&self) -> f64 {
        let [a, b, c] = self.dims;
        round_to(4.0 * (a + b + c), 3)
    }

    /// Cube with (approximately) the same volume
    pub fn compress(&self) -> Result<Pudelko, PudelkoError> {
        let side = self.volume().cbrt();
        log::debug!("compressing {} into cube with side {} m", self, side);
        Self::from_meters([side; 3], Unit::Meter)
    }

    /// Side-by-side sum of two boxes, tagged with meters.
    /// Sides are paired by position, not by size.
    pub fn checked_add(&self, other: &Pudelko) -> Result<Pudelko, PudelkoError> {
        Self::new(
            self.dims[0] + other.dims[0],
            self.dims[1] + other.dims[1],
            self.dims[2] + other.dims[2],
            Unit::Meter,
        )
    }

    /// Dimension by position: 0 = a, 1 = b, 2 = c
    pub fn get(&self, index: usize) -> Result<f64, PudelkoError> {
        match index {
            0 => Ok(self.a()),
            1 => Ok(self.b()),
            2 => Ok(self.c()),
            _ => Err(PudelkoError::IndexOutOfRange(index)),
        }
    }

    /// `[a, b, c]` in stored order
    pub fn to_array(&self) -> [f64; 3] {
        [self.a(), self.b(), self.c()]
    }

    /// Iterate over `a`, `b`, `c` in stored order
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    fn sorted(&self) -> [f64; 3] {
        let mut dims = self.to_array();
        dims.sort_by(f64::total_cmp);
        dims
    }
}

impl Default for Pudelko {
    fn default() -> Self {
        Self {
            dims: [DEFAULT_DIMENSION; 3],
            unit: Unit::Meter,
        }
    }
}

impl PartialEq for Pudelko {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

// Dimensions are validated finite, so equality is total.
impl Eq for Pudelko {}

impl Hash for Pudelko {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.sorted() {
            value.to_bits().hash(state);
        }
    }
}

impl Add for Pudelko {
    type Output = Result<Pudelko, PudelkoError>;

    fn add(self, rhs: Pudelko) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Add<&Pudelko> for &Pudelko {
    type Output = Result<Pudelko, PudelkoError>;

    fn add(self, rhs: &Pudelko) -> Self::Output {
        self.checked_add(rhs)
    }
}

/// # Panics
///
/// Panics if `index > 2`; use [`Pudelko::get`] for a fallible lookup.
impl Index<usize> for Pudelko {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.dims.get(index) {
            Some(value) => value,
            None => panic!("{}", PudelkoError::IndexOutOfRange(index)),
        }
    }
}

impl IntoIterator for Pudelko {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Pudelko {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Pudelko> for [f64; 3] {
    fn from(pudelko: Pudelko) -> Self {
        pudelko.to_array()
    }
}

impl TryFrom<(i32, i32, i32)> for Pudelko {
    type Error = PudelkoError;

    fn try_from((a, b, c): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Pudelko::from_millimeter_triple(a, b, c)
    }
}

/// Builder with named, optional sides.
///
/// Supplied sides are read in `unit`; omitted sides are 0.1 m whatever the unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PudelkoBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    unit: Unit,
}

impl PudelkoBuilder {
    pub fn a(mut self, value: f64) -> Self {
        self.a = Some(value);
        self
    }

    pub fn b(mut self, value: f64) -> Self {
        self.b = Some(value);
        self
    }

    pub fn c(mut self, value: f64) -> Self {
        self.c = Some(value);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn build(self) -> Result<Pudelko, PudelkoError> {
        let unit = self.unit;
        let side = |value: Option<f64>| value.map_or(DEFAULT_DIMENSION, |v| unit.to_meters(v));
        Pudelko::from_meters([side(self.a), side(self.b), side(self.c)], unit)
    }
}

/// Serialized shape: meters plus the display unit
#[derive(Serialize, Deserialize)]
struct PudelkoRecord {
    a: f64,
    b: f64,
    c: f64,
    #[serde(default)]
    unit: Unit,
}

impl TryFrom<PudelkoRecord> for Pudelko {
    type Error = PudelkoError;

    fn try_from(record: PudelkoRecord) -> Result<Self, Self::Error> {
        Pudelko::from_meters([record.a, record.b, record.c], record.unit)
    }
}

impl From<Pudelko> for PudelkoRecord {
    fn from(pudelko: Pudelko) -> Self {
        Self {
            a: pudelko.a(),
            b: pudelko.b(),
            c: pudelko.c(),
            unit: pudelko.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_converts_to_meters() {
        let p = Pudelko::new(150.0, 20.0, 3.0, Unit::Centimeter).unwrap();
        assert_eq!(p.to_array(), [1.5, 0.2, 0.03]);
        assert_eq!(p.unit(), Unit::Centimeter);

        let p = Pudelko::new(2500.0, 1.0, 10000.0, Unit::Millimeter).unwrap();
        assert_eq!(p.to_array(), [2.5, 0.001, 10.0]);
    }

    #[test]
    fn test_new_rounds_to_millimeters() {
        let p = Pudelko::new(1.23456, 2.0004, 0.0016, Unit::Meter).unwrap();
        assert_eq!(p.a(), 1.235);
        assert_eq!(p.b(), 2.0);
        assert_eq!(p.c(), 0.002);
    }

    #[test]
    fn test_rounds_to_zero_is_rejected() {
        let result = Pudelko::new(0.0004, 1.0, 1.0, Unit::Meter);
        assert!(matches!(
            result,
            Err(PudelkoError::InvalidDimension {
                dimension: Dimension::A,
                bound: DimensionBound::NotPositive,
                ..
            })
        ));

        // 0.1 mm is below one millimeter
        assert!(Pudelko::new(1.0, 0.1, 1.0, Unit::Millimeter).is_err());
    }

    #[test]
    fn test_names_offending_dimension() {
        let err = Pudelko::new(1.0, 2.0, 11.0, Unit::Meter).unwrap_err();
        assert_eq!(
            err,
            PudelkoError::InvalidDimension {
                dimension: Dimension::C,
                value: 11.0,
                bound: DimensionBound::TooLarge,
            }
        );

        let err = Pudelko::new(1.0, f64::NAN, 1.0, Unit::Meter).unwrap_err();
        assert!(matches!(
            err,
            PudelkoError::InvalidDimension {
                dimension: Dimension::B,
                bound: DimensionBound::NotFinite,
                ..
            }
        ));
    }

    #[test]
    fn test_upper_bound_in_every_unit() {
        assert!(Pudelko::new(10.0, 10.0, 10.0, Unit::Meter).is_ok());
        assert!(Pudelko::new(1000.0, 1000.0, 1000.0, Unit::Centimeter).is_ok());
        assert!(Pudelko::new(10000.0, 10000.0, 10000.0, Unit::Millimeter).is_ok());
        assert!(Pudelko::new(1000.1, 1.0, 1.0, Unit::Centimeter).is_err());
        assert!(Pudelko::new(1.0, 10001.0, 1.0, Unit::Millimeter).is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let p = Pudelko::builder().build().unwrap();
        assert_eq!(p.to_array(), [0.1, 0.1, 0.1]);
        assert_eq!(p, Pudelko::default());

        let p = Pudelko::builder().a(2.5).build().unwrap();
        assert_eq!(p.to_array(), [2.5, 0.1, 0.1]);

        // Omitted sides stay 0.1 m even when the unit is millimeters
        let p = Pudelko::builder()
            .a(500.0)
            .b(250.0)
            .unit(Unit::Millimeter)
            .build()
            .unwrap();
        assert_eq!(p.to_array(), [0.5, 0.25, 0.1]);
        assert_eq!(p.unit(), Unit::Millimeter);
    }

    #[test]
    fn test_metrics_use_meters() {
        let p = Pudelko::new(100.0, 200.0, 300.0, Unit::Centimeter).unwrap();
        assert_eq!(p.volume(), 6.0);
        assert_eq!(p.surface_area(), 22.0);
        assert_eq!(p.edge_sum(), 24.0);

        let small = Pudelko::new(1.0, 1.0, 1.0, Unit::Millimeter).unwrap();
        assert_eq!(small.volume(), 0.000000001);
        assert_eq!(small.surface_area(), 0.000006);
    }

    #[test]
    fn test_compress_keeps_volume() {
        let p = Pudelko::new(2.0, 4.0, 1.0, Unit::Meter).unwrap();
        let cube = p.compress().unwrap();
        assert_eq!(cube.to_array(), [2.0, 2.0, 2.0]);
        assert_eq!(cube.unit(), Unit::Meter);
        assert_eq!(cube.volume(), p.volume());
    }

    #[test]
    fn test_hash_matches_sorted_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Pudelko::new(1.0, 2.0, 3.0, Unit::Meter).unwrap());
        set.insert(Pudelko::new(3.0, 2.0, 1.0, Unit::Meter).unwrap());
        set.insert(Pudelko::new(200.0, 300.0, 100.0, Unit::Centimeter).unwrap());
        assert_eq!(set.len(), 1);

        set.insert(Pudelko::new(1.0, 2.0, 4.0, Unit::Meter).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_by_reference() {
        let p1 = Pudelko::new(1.0, 1.0, 1.0, Unit::Meter).unwrap();
        let p2 = Pudelko::new(50.0, 50.0, 50.0, Unit::Centimeter).unwrap();
        let sum = (&p1 + &p2).unwrap();
        assert_eq!(sum.to_array(), [1.5, 1.5, 1.5]);
        assert_eq!(sum.unit(), Unit::Meter);
    }

    #[test]
    fn test_add_over_limit_fails() {
        let p1 = Pudelko::new(6.0, 1.0, 1.0, Unit::Meter).unwrap();
        let p2 = Pudelko::new(5.0, 1.0, 1.0, Unit::Meter).unwrap();
        assert!(matches!(
            p1 + p2,
            Err(PudelkoError::InvalidDimension {
                dimension: Dimension::A,
                bound: DimensionBound::TooLarge,
                ..
            })
        ));
    }

    #[test]
    fn test_add_tolerates_float_noise_at_limit() {
        let p1 = Pudelko::new(3.3, 1.0, 1.0, Unit::Meter).unwrap();
        let p2 = Pudelko::new(6.7, 1.0, 1.0, Unit::Meter).unwrap();
        let sum = (p1 + p2).unwrap();
        assert_eq!(sum.a(), 10.0);
    }

    #[test]
    #[should_panic(expected = "Index out of range: 3")]
    fn test_index_operator_panics_out_of_range() {
        let p = Pudelko::default();
        let value = p[3];
        assert!(value > 0.0);
    }

    #[test]
    fn test_serde_round_trip_keeps_unit() {
        let p = Pudelko::new(25.0, 50.0, 75.0, Unit::Centimeter).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"a":0.25,"b":0.5,"c":0.75,"unit":"cm"}"#);

        let back: Pudelko = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.unit(), Unit::Centimeter);
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<Pudelko>(r#"{"a":0,"b":1,"c":1}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid dimension a"));

        let err =
            serde_json::from_str::<Pudelko>(r#"{"a":1,"b":1,"c":1,"unit":"ft"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid unit: ft"));
    }
}
