//! Decimal degrees: a single signed number per axis.
//! <https://en.wikipedia.org/wiki/Decimal_degrees>

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::{parse_to_degree_value, Axis, Sign};

use super::{
    dm::DegMin,
    dms::DegMinSec,
    errors::ParseError,
    ConvertOptions, Sexagesimal,
};

/// Signed decimal degrees of a latitude or a longitude.
///
/// The value is always finite and never exceeds the axis bound
/// (90 degrees for latitude, 180 for longitude).
/// The hemisphere follows the sign: positive values are north or east.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreeValue {
    degrees: f64,
    axis: Axis,
}

impl DegreeValue {
    /// Construct a value on the given axis.
    ///
    /// # Errors
    /// The number is not finite or exceeds the axis bound.
    pub fn new(degrees: f64, axis: Axis) -> Result<Self, ParseError> {
        if !degrees.is_finite() {
            return Err(ParseError::NotFinite);
        }

        if !axis.contains(degrees) {
            return Err(axis.out_of_range().into());
        }

        Ok(Self {
            degrees: unsigned_zero(degrees),
            axis,
        })
    }

    /// Construct a latitude.
    ///
    /// # Errors
    /// The number is not finite or its absolute value is more than 90.
    pub fn latitude(degrees: f64) -> Result<Self, ParseError> {
        Self::new(degrees, Axis::Latitude)
    }

    /// Construct a longitude.
    ///
    /// # Errors
    /// The number is not finite or its absolute value is more than 180.
    pub fn longitude(degrees: f64) -> Result<Self, ParseError> {
        Self::new(degrees, Axis::Longitude)
    }

    /// Parse the value from any of the DD, DM, DMS notations.
    ///
    /// # Errors
    /// See [`parse_to_degree_value`](crate::parse_to_degree_value).
    pub fn parse(s: &str, axis: Axis) -> Result<Self, ParseError> {
        parse_to_degree_value(s, axis)
    }

    pub(crate) fn with_magnitude(magnitude: f64, sign: Sign, axis: Axis) -> Result<Self, ParseError> {
        let degrees = match sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        };
        Self::new(degrees, axis)
    }

    /// Composed from already validated parts.
    /// Floating point error can only push the magnitude onto the bound, never past it.
    pub(crate) fn composed(magnitude: f64, sign: Sign, axis: Axis) -> Self {
        let magnitude = magnitude.min(f64::from(axis.bound()));
        let degrees = match sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        };
        Self {
            degrees: unsigned_zero(degrees),
            axis,
        }
    }

    /// The signed number of degrees
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// Latitude or longitude
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// The absolute value of the degrees
    pub fn magnitude(self) -> f64 {
        self.degrees.abs()
    }

    /// The sign of the degrees. Zero is positive.
    pub fn sign(self) -> Sign {
        Sign::from(self.degrees >= 0.0)
    }

    /// The hemisphere letter: N, S, E or W
    pub fn hemisphere(self) -> char {
        self.axis.hemisphere(self.sign())
    }

    /// Degrees and decimal minutes
    pub fn to_dm(self, options: ConvertOptions) -> DegMin {
        DegMin::from_degree_value(self, options)
    }

    /// Degrees, whole minutes and decimal seconds
    pub fn to_dms(self, options: ConvertOptions) -> DegMinSec {
        DegMinSec::from_degree_value(self, options)
    }

    /// The absolute difference in degrees from the other value
    pub fn drift(self, other: Self) -> f64 {
        (self.degrees - other.degrees).abs()
    }
}

/// Negative zero is stored as zero: it has no hemisphere of its own
fn unsigned_zero(degrees: f64) -> f64 {
    if degrees == 0.0 {
        0.0
    } else {
        degrees
    }
}

impl PartialOrd for DegreeValue {
    /// Only the values of the same axis are comparable
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.axis == other.axis {
            self.degrees.partial_cmp(&other.degrees)
        } else {
            None
        }
    }
}

impl From<DegreeValue> for f64 {
    fn from(value: DegreeValue) -> Self {
        value.degrees
    }
}
