//! Degrees, whole minutes and decimal seconds, e.g. `48° 48' 59.98320" N`.
//!
//! [Read more](https://en.wikipedia.org/wiki/Minute_and_second_of_arc)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{format_dms, Axis, Sign},
    utils::{div_mod, round_to, whole_and_fraction},
};

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    dd::DegreeValue,
    errors::{FormatError, OutOfRange},
    ConvertOptions, Sexagesimal,
};

/// Whole degrees, whole minutes `0..=59` and decimal seconds `0 <= seconds < 60`
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegMinSec {
    degrees: u16,
    minutes: u8,
    seconds: f64,
    sign: Sign,
    axis: Axis,
}

impl DegMinSec {
    /// Construct from the parts.
    ///
    /// # Errors
    /// Minutes or seconds are not in `[0..60)` or the whole angle exceeds the axis bound.
    pub fn new(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        sign: Sign,
        axis: Axis,
    ) -> Result<Self, OutOfRange> {
        let dms = Self {
            degrees,
            minutes,
            seconds,
            sign,
            axis,
        };
        dms.check()?;
        Ok(Self::carried(
            degrees,
            u16::from(minutes),
            seconds,
            sign,
            axis,
        ))
    }

    /// Normalize the full second into the next minute
    /// and the full minute into the next degree
    fn carried(degrees: u16, minutes: u16, seconds: f64, sign: Sign, axis: Axis) -> Self {
        let full_seconds = f64::from(SECONDS_IN_MINUTE);
        let (minutes, seconds) = if seconds >= full_seconds {
            (minutes.saturating_add(1), seconds - full_seconds)
        } else {
            (minutes, seconds)
        };

        let (carry, minutes) = div_mod(minutes, u16::from(MINUTES_IN_DEGREE));
        let degrees = degrees.saturating_add(carry);

        // zero has no hemisphere to the south or west
        let sign = if degrees == 0 && minutes == 0 && seconds == 0.0 {
            Sign::Positive
        } else {
            sign
        };

        Self {
            degrees,
            minutes: minutes as u8,
            seconds,
            sign,
            axis,
        }
    }

    /// The whole degrees
    pub const fn degrees(self) -> u16 {
        self.degrees
    }

    /// The whole minutes
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The seconds with their decimal fraction
    pub const fn seconds(self) -> f64 {
        self.seconds
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
        f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + self.seconds / SECONDS_IN_DEGREE
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        sign: Sign,
        axis: Axis,
    ) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            sign,
            axis,
        }
    }
}

impl Sexagesimal for DegMinSec {
    fn from_degree_value(value: DegreeValue, options: ConvertOptions) -> Self {
        let (degrees, fraction) = whole_and_fraction(value.magnitude());
        let total_minutes = fraction * f64::from(MINUTES_IN_DEGREE);
        let (minutes, minutes_fraction) = whole_and_fraction(total_minutes);
        let seconds = minutes_fraction * f64::from(SECONDS_IN_MINUTE);
        let seconds = options
            .decimals
            .map_or(seconds, |decimals| round_to(seconds, decimals));

        Self::carried(degrees, minutes, seconds, value.sign(), value.axis())
    }

    fn to_degree_value(self) -> DegreeValue {
        DegreeValue::composed(self.magnitude(), self.sign, self.axis)
    }

    fn rounded(self, decimals: u8) -> Self {
        Self::carried(
            self.degrees,
            u16::from(self.minutes),
            round_to(self.seconds, decimals),
            self.sign,
            self.axis,
        )
    }

    fn check(self) -> Result<(), OutOfRange> {
        if self.minutes >= MINUTES_IN_DEGREE {
            return Err(OutOfRange::ArcMinutes);
        }

        let valid_seconds = 0.0..f64::from(SECONDS_IN_MINUTE);
        if !valid_seconds.contains(&self.seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        if !self.axis.contains(self.magnitude()) {
            return Err(self.axis.out_of_range());
        }

        Ok(())
    }

    fn format(self, precision: u8) -> Result<String, FormatError> {
        format_dms(self, precision)
    }
}

impl From<DegMinSec> for DegreeValue {
    fn from(dms: DegMinSec) -> Self {
        dms.to_degree_value()
    }
}
