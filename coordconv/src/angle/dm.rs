//! Degrees and decimal minutes, e.g. `48° 48.99972' N`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{format_dm, Axis, Sign},
    utils::{round_to, whole_and_fraction},
};

use super::{
    consts::MINUTES_IN_DEGREE,
    dd::DegreeValue,
    errors::{FormatError, OutOfRange},
    ConvertOptions, Sexagesimal,
};

/// Whole degrees with the decimal minutes: `0 <= minutes < 60`
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegMin {
    degrees: u16,
    minutes: f64,
    sign: Sign,
    axis: Axis,
}

impl DegMin {
    /// Construct from the parts.
    ///
    /// # Errors
    /// Minutes are not in `[0..60)` or the whole angle exceeds the axis bound.
    pub fn new(degrees: u16, minutes: f64, sign: Sign, axis: Axis) -> Result<Self, OutOfRange> {
        let dm = Self {
            degrees,
            minutes,
            sign,
            axis,
        };
        dm.check()?;
        Ok(Self::carried(degrees, minutes, sign, axis))
    }

    /// Normalize the full minute into the next degree
    fn carried(degrees: u16, minutes: f64, sign: Sign, axis: Axis) -> Self {
        let full_minutes = f64::from(MINUTES_IN_DEGREE);
        let (degrees, minutes) = if minutes >= full_minutes {
            (degrees.saturating_add(1), minutes - full_minutes)
        } else {
            (degrees, minutes)
        };

        // zero has no hemisphere to the south or west
        let sign = if degrees == 0 && minutes == 0.0 {
            Sign::Positive
        } else {
            sign
        };

        Self {
            degrees,
            minutes,
            sign,
            axis,
        }
    }

    /// The whole degrees
    pub const fn degrees(self) -> u16 {
        self.degrees
    }

    /// The minutes with their decimal fraction
    pub const fn minutes(self) -> f64 {
        self.minutes
    }

    /// Positive for north and east
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// Latitude or longitude
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// The hemisphere letter: N, S, E or W
    pub fn hemisphere(self) -> char {
        self.axis.hemisphere(self.sign)
    }

    fn magnitude(self) -> f64 {
        f64::from(self.degrees) + self.minutes / f64::from(MINUTES_IN_DEGREE)
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(degrees: u16, minutes: f64, sign: Sign, axis: Axis) -> Self {
        Self {
            degrees,
            minutes,
            sign,
            axis,
        }
    }
}

impl Sexagesimal for DegMin {
    fn from_degree_value(value: DegreeValue, options: ConvertOptions) -> Self {
        let (degrees, fraction) = whole_and_fraction(value.magnitude());
        let minutes = fraction * f64::from(MINUTES_IN_DEGREE);
        let minutes = options
            .decimals
            .map_or(minutes, |decimals| round_to(minutes, decimals));

        Self::carried(degrees, minutes, value.sign(), value.axis())
    }

    fn to_degree_value(self) -> DegreeValue {
        DegreeValue::composed(self.magnitude(), self.sign, self.axis)
    }

    fn rounded(self, decimals: u8) -> Self {
        Self::carried(
            self.degrees,
            round_to(self.minutes, decimals),
            self.sign,
            self.axis,
        )
    }

    fn check(self) -> Result<(), OutOfRange> {
        let valid_minutes = 0.0..f64::from(MINUTES_IN_DEGREE);
        if !valid_minutes.contains(&self.minutes) {
            return Err(OutOfRange::ArcMinutes);
        }

        if !self.axis.contains(self.magnitude()) {
            return Err(self.axis.out_of_range());
        }

        Ok(())
    }

    fn format(self, precision: u8) -> Result<String, FormatError> {
        format_dm(self, precision)
    }
}

impl From<DegMin> for DegreeValue {
    fn from(dm: DegMin) -> Self {
        dm.to_degree_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat(degrees: f64) -> DegreeValue {
        DegreeValue::latitude(degrees).unwrap()
    }

    #[test]
    fn salt_spring_island() {
        let dm = lat(48.816_662).to_dm(ConvertOptions::with_decimals(5));
        assert_eq!(dm.degrees(), 48);
        assert!((dm.minutes() - 48.999_72).abs() < 1e-9);
        assert_eq!(dm.hemisphere(), 'N');
    }

    #[test]
    fn rounded_to_zero_is_north() {
        let dm = lat(-0.000_001).to_dm(ConvertOptions::with_decimals(2));
        assert_eq!(dm.sign(), Sign::Positive);
        assert_eq!(dm.hemisphere(), 'N');

        let dm = lat(-0.000_001).to_dm(ConvertOptions::full());
        assert_eq!(dm.hemisphere(), 'S');
        assert_eq!(dm.rounded(2).hemisphere(), 'N');
    }

    #[test]
    fn full_precision_is_kept() {
        let dm = lat(10.123_456_789).to_dm(ConvertOptions::full());
        assert_eq!(dm.degrees(), 10);
        assert!((dm.minutes() - 7.407_407_34).abs() < 1e-9);
    }

    #[test]
    fn southern() {
        let dm = lat(-33.45).to_dm(ConvertOptions::full());
        assert_eq!(dm.degrees(), 33);
        assert!((dm.minutes() - 27.0).abs() < 1e-9);
        assert_eq!(dm.sign(), Sign::Negative);
        assert_eq!(dm.hemisphere(), 'S');
    }

    #[test]
    fn rounding_carries_into_degrees() {
        let dm = lat(48.999_999_9).to_dm(ConvertOptions::with_decimals(2));
        assert_eq!(dm.degrees(), 49);
        assert!(dm.minutes().abs() < f64::EPSILON);
    }

    #[test]
    fn carry_onto_pole_is_valid() {
        let dm = lat(89.999_999_9).to_dm(ConvertOptions::with_decimals(3));
        assert_eq!(dm.degrees(), 90);
        assert!(dm.check().is_ok());
    }

    #[test]
    fn rounded_later() {
        let dm = DegMin::new(12, 59.999_6, Sign::Positive, Axis::Longitude).unwrap();
        let rounded = dm.rounded(3);
        assert_eq!(rounded.degrees(), 13);
        assert!(rounded.minutes().abs() < f64::EPSILON);

        let not_carried = dm.rounded(4);
        assert_eq!(not_carried.degrees(), 12);
        assert!((not_carried.minutes() - 59.999_6).abs() < 1e-9);
    }

    #[test]
    fn back_to_decimal() {
        let dm = DegMin::new(70, 40.0, Sign::Negative, Axis::Longitude).unwrap();
        let dd = DegreeValue::from(dm);
        assert!((dd.degrees() + 70.666_666_666_666_67).abs() < 1e-12);
        assert_eq!(dd.axis(), Axis::Longitude);
    }

    #[test]
    fn round_trip_without_rounding() {
        for &degrees in &[0.0, 0.5, -12.345_678, 45.000_001, 89.999_999, -90.0] {
            let value = lat(degrees);
            let back = value.to_dm(ConvertOptions::full()).to_degree_value();
            assert!(back.drift(value) < 1e-12, "{degrees}");
        }
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn full_minute() {
        let _ = DegMin::new(30, 60.0, Sign::Positive, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn negative_minutes() {
        let _ = DegMin::new(30, -0.5, Sign::Positive, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn nan_minutes() {
        let _ = DegMin::new(30, f64::NAN, Sign::Positive, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Latitude")]
    fn beyond_pole() {
        let _ = DegMin::new(90, 0.5, Sign::Positive, Axis::Latitude).unwrap();
    }

    #[test]
    fn beyond_pole_is_valid_longitude() {
        assert!(DegMin::new(90, 0.5, Sign::Positive, Axis::Longitude).is_ok());
    }
}
