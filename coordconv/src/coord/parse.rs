//! Recognize the DD, DM and DMS notations once at the boundary
//! and resolve them into decimal degrees.

use std::{convert::TryFrom, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::angle::{
    dd::DegreeValue, OutOfRange, ParseError, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE,
    SECONDS_IN_MINUTE,
};

use super::{Axis, Sign};

/// Construct regular expression to parse any of the supported notations:
///  - `[H][+|-]D[.d][°][H]` for decimal degrees
///  - `[H][+|-]D° M[.m]'[H]` for degrees with minutes
///  - `[H][+|-]D° M' S[.s]"[H]` for degrees with minutes and seconds
///
/// where `H` is the hemisphere letter.
/// The degree sign can be replaced by a space when the minutes follow.
fn parse_coordinate_re() -> &'static str {
    r#"(?x)                             # enables verbose mode (to allow these comments)
    ^                                       # match the whole line from the start
    (?P<prefix>[NSEWnsew])?                     # optional leading hemisphere letter
    \x20*
    (?P<sign>[+-])?                             # optional sign
    (?P<deg>\d+(?:\.\d+)?)                      # mandatory degrees VALUE - fraction only without minutes
    (?:
        (?:[°º*]\x20*|\x20+)                        # degree sign or at least a space before minutes
        (?P<min>\d+(?:\.\d+)?)                      # minutes VALUE - fraction only without seconds
        \x20*['′]                                   # arcminute sign
        (?:
            \x20*
            (?P<sec>\d+(?:\.\d+)?)                      # seconds VALUE with optional fraction
            \x20*(?:"|″|'')                             # arcsecond sign
        )?                                          # seconds are optional
    |
        [°º*]?                                      # plain degrees with optional sign
    )
    \x20*
    (?P<suffix>[NSEWnsew])?                     # optional trailing hemisphere letter
    $                                       # match the whole line till the end
    "#
}

lazy_static! {
    static ref RE_COORDINATE: Regex =
        Regex::new(parse_coordinate_re()).expect("Coordinate regex is valid");
}

/// The raw input of the parser: either a number or a text
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RawCoordinate<'a> {
    /// Signed decimal degrees
    Degrees(f64),
    /// Formatted string in any of the supported notations
    Text(&'a str),
}

impl From<f64> for RawCoordinate<'_> {
    fn from(degrees: f64) -> Self {
        Self::Degrees(degrees)
    }
}

impl<'a> From<&'a str> for RawCoordinate<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for RawCoordinate<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// The notation detected in a text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Decimal degrees
    DecimalDegrees,
    /// Degrees and decimal minutes
    DegreesMinutes,
    /// Degrees, minutes and decimal seconds
    DegreesMinutesSeconds,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbr = match self {
            Self::DecimalDegrees => "DD",
            Self::DegreesMinutes => "DM",
            Self::DegreesMinutesSeconds => "DMS",
        };
        write!(f, "{abbr}")
    }
}

/// The parts of a coordinate as they appear in a text,
/// not yet checked against their ranges
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Components {
    /// Degrees, with the fraction for the DD notation
    pub degrees: f64,
    /// Minutes, with the fraction for the DM notation
    pub minutes: Option<f64>,
    /// Seconds with the fraction
    pub seconds: Option<f64>,
    /// The explicit sign token
    pub sign: Option<Sign>,
    /// The hemisphere letter in upper case
    pub hemisphere: Option<char>,
}

impl Components {
    /// Check the ranges of the parts and compose them into decimal degrees
    ///
    /// # Errors
    /// - minutes or seconds are not in `[0..60)`;
    /// - the hemisphere letter belongs to the other axis or contradicts the sign;
    /// - the composed value exceeds the axis bound.
    pub fn resolve(self, axis: Axis) -> Result<DegreeValue, ParseError> {
        let Self {
            degrees,
            minutes,
            seconds,
            sign,
            hemisphere,
        } = self;

        if !degrees.is_finite() {
            return Err(ParseError::NotFinite);
        }

        let minutes = minutes.unwrap_or_default();
        if !(0.0..f64::from(MINUTES_IN_DEGREE)).contains(&minutes) {
            return Err(OutOfRange::ArcMinutes.into());
        }

        let seconds = seconds.unwrap_or_default();
        if !(0.0..f64::from(SECONDS_IN_MINUTE)).contains(&seconds) {
            return Err(OutOfRange::ArcSeconds.into());
        }

        let hemisphere_sign = hemisphere
            .map(|letter| axis.sign_of_hemisphere(letter).map(|s| (s, letter)))
            .transpose()?;

        let sign = match (sign, hemisphere_sign) {
            (Some(sign), Some((by_letter, letter))) if sign != by_letter => {
                return Err(ParseError::ConflictingSign { sign, letter });
            }
            (_, Some((by_letter, _))) => by_letter,
            (Some(sign), None) => sign,
            (None, None) => Sign::Positive,
        };

        let magnitude =
            degrees + minutes / f64::from(MINUTES_IN_DEGREE) + seconds / SECONDS_IN_DEGREE;
        DegreeValue::with_magnitude(magnitude, sign, axis)
    }
}

/// The input with its shape detected once
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParsedInput {
    /// Plain signed number of degrees
    Degrees(f64),
    /// A text in one of the notations
    StringForm {
        /// Which of the notations was used
        notation: Notation,
        /// The parts found in the text
        components: Components,
    },
}

impl ParsedInput {
    /// The notation of the input. Plain numbers are decimal degrees.
    pub const fn notation(&self) -> Notation {
        match self {
            Self::Degrees(_) => Notation::DecimalDegrees,
            Self::StringForm { notation, .. } => *notation,
        }
    }

    /// Validate the input against the axis
    ///
    /// # Errors
    /// See [`Components::resolve`].
    pub fn resolve(self, axis: Axis) -> Result<DegreeValue, ParseError> {
        match self {
            Self::Degrees(degrees) => DegreeValue::new(degrees, axis),
            Self::StringForm { components, .. } => components.resolve(axis),
        }
    }
}

/// Parse the captured number and ensure it is finite
fn number(caps: &Captures<'_>, name: &str) -> Result<Option<f64>, ParseError> {
    let Some(m) = caps.name(name) else {
        return Ok(None);
    };

    let value: f64 = m.as_str().parse()?;
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(ParseError::NotFinite)
    }
}

fn has_fraction(caps: &Captures<'_>, name: &str) -> bool {
    caps.name(name).map_or(false, |m| m.as_str().contains('.'))
}

impl FromStr for ParsedInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyString);
        }

        let caps = RE_COORDINATE
            .captures(s)
            .ok_or_else(|| ParseError::Notation(s.to_string()))?;

        let hemisphere = match (caps.name("prefix"), caps.name("suffix")) {
            (Some(_), Some(_)) => return Err(ParseError::DoubleHemisphere),
            (prefix, suffix) => prefix
                .or(suffix)
                .and_then(|m| m.as_str().chars().next())
                .map(|letter| letter.to_ascii_uppercase()),
        };

        let sign = caps
            .name("sign")
            .and_then(|m| m.as_str().chars().next())
            .and_then(|c| Sign::try_from(c).ok());

        let degrees = number(&caps, "deg")?.ok_or_else(|| ParseError::Notation(s.to_string()))?;
        let minutes = number(&caps, "min")?;
        let seconds = number(&caps, "sec")?;

        if (minutes.is_some() && has_fraction(&caps, "deg"))
            || (seconds.is_some() && has_fraction(&caps, "min"))
        {
            return Err(ParseError::FractionalComponent);
        }

        let notation = match (minutes, seconds) {
            (None, _) => Notation::DecimalDegrees,
            (Some(_), None) => Notation::DegreesMinutes,
            (Some(_), Some(_)) => Notation::DegreesMinutesSeconds,
        };

        Ok(Self::StringForm {
            notation,
            components: Components {
                degrees,
                minutes,
                seconds,
                sign,
                hemisphere,
            },
        })
    }
}

impl<'a> TryFrom<RawCoordinate<'a>> for ParsedInput {
    type Error = ParseError;

    fn try_from(raw: RawCoordinate<'a>) -> Result<Self, Self::Error> {
        match raw {
            RawCoordinate::Degrees(degrees) => Ok(Self::Degrees(degrees)),
            RawCoordinate::Text(text) => text.parse(),
        }
    }
}

/// Parse a number or a formatted string into decimal degrees of the given axis.
///
/// The strings are accepted in DD, DM and DMS notations,
/// with a sign or a hemisphere letter (before or after the value):
///
/// ```
/// use coordconv::{parse_to_degree_value, Axis};
///
/// let lat = parse_to_degree_value("48° 48.99972' N", Axis::Latitude).unwrap();
/// assert!((lat.degrees() - 48.816_662).abs() < 1e-9);
///
/// let lon = parse_to_degree_value(-123.508_873, Axis::Longitude).unwrap();
/// assert_eq!(lon.hemisphere(), 'W');
/// ```
///
/// # Errors
/// - the text is empty or has no recognizable notation;
/// - some value is not finite;
/// - minutes or seconds are not in `[0..60)`;
/// - a fraction is followed by a smaller unit;
/// - the hemisphere letter belongs to the other axis, is given twice, or contradicts the sign;
/// - the absolute value exceeds the axis bound (90 for latitude, 180 for longitude).
pub fn parse_to_degree_value<'a>(
    input: impl Into<RawCoordinate<'a>>,
    axis: Axis,
) -> Result<DegreeValue, ParseError> {
    ParsedInput::try_from(input.into())?.resolve(axis)
}
