use std::num::ParseFloatError;

use thiserror::Error;

use crate::coord::{Axis, Sign};

use super::consts::MAX_DECIMALS;

/// Some component of a coordinate exceeds its valid range
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// |lat| > 90
    #[error("latitude must be in range [-90..90]")]
    Latitude,
    /// |lon| > 180
    #[error("longitude must be in range [-180..180]")]
    Longitude,
    /// min >= 60
    #[error("arc minute value not in range [0..60)")]
    ArcMinutes,
    /// sec >= 60
    #[error("arc second value not in range [0..60)")]
    ArcSeconds,
}

/// Malformed or out-of-range coordinate input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The value is well-formed but out of its range
    #[error("cannot parse coordinate: {0}")]
    Range(#[from] OutOfRange),
    /// A numeric component failed to parse
    #[error("cannot parse coordinate: {0}")]
    Float(#[from] ParseFloatError),
    /// Nothing but whitespace was given
    #[error("cannot parse coordinate: empty string provided")]
    EmptyString,
    /// The text is neither DD, nor DM, nor DMS
    #[error("cannot parse coordinate: {0:?} is not a DD, DM or DMS notation")]
    Notation(String),
    /// NaN or infinity
    #[error("cannot parse coordinate: the value is not finite")]
    NotFinite,
    /// E/W given for a latitude or N/S for a longitude
    #[error("cannot parse coordinate: hemisphere {letter:?} does not belong to the {axis}")]
    WrongHemisphere {
        /// The axis being parsed
        axis: Axis,
        /// The offending letter
        letter: char,
    },
    /// The hemisphere letter was found both before and after the value
    #[error("cannot parse coordinate: hemisphere is given both before and after the value")]
    DoubleHemisphere,
    /// The explicit sign disagrees with the hemisphere letter
    #[error("cannot parse coordinate: sign '{sign}' contradicts hemisphere {letter:?}")]
    ConflictingSign {
        /// The sign token
        sign: Sign,
        /// The hemisphere letter
        letter: char,
    },
    /// A component with a decimal fraction is followed by a smaller unit, e.g. `48.5° 30'`
    #[error("cannot parse coordinate: only the last component can have a decimal fraction")]
    FractionalComponent,
}

/// Attempt to format an invalid coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Some component is out of its range
    #[error("cannot format coordinate: {0}")]
    Range(#[from] OutOfRange),
    /// NaN or infinity
    #[error("cannot format coordinate: the value is not finite")]
    NotFinite,
    /// Too many decimal digits requested
    #[error("cannot format coordinate: precision {0} exceeds the maximum of {max} decimals", max = MAX_DECIMALS)]
    Precision(u8),
}
