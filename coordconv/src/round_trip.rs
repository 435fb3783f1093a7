//! Show the drift caused by the display precision.
//!
//! A validated (latitude, longitude) sample goes through every format
//! independently: convert, format with the chosen precision
//! and parse the *formatted strings* back into decimal degrees.
//! The formatted string is the lossy representative, so the re-parsed value
//! differs from the original exactly by the precision loss.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    angle::{
        dd::DegreeValue, dm::DegMin, dms::DegMinSec, ConvertOptions, FormatError, ParseError,
        Sexagesimal,
    },
    config::PrecisionSettings,
    coord::{format_dd_pair, parse_pair_to_dd, Axis, Notation},
};

/// Are both the latitude and the longitude numbers within their bounds?
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    Axis::Latitude.contains(lat) && Axis::Longitude.contains(lon)
}

/// The sample itself is invalid, nothing can be converted
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error(
    "Please enter valid coordinates. Latitude must be between -90 and 90, longitude between -180 and 180."
)]
pub struct ValidationError {
    /// The rejected latitude
    pub lat: f64,
    /// The rejected longitude
    pub lon: f64,
}

/// A failure confined to the pipeline of a single format.
///
/// Displayed as a placeholder; the cause is available as the error source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The input or the formatted string failed to parse
    #[error("Conversion error")]
    Parse(#[from] ParseError),
    /// The converted value failed to format
    #[error("Conversion error")]
    Format(#[from] FormatError),
}

/// The result of the round trip through a single format
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The format of the `display` strings
    pub notation: Notation,
    /// The formatted latitude and longitude
    pub display: (String, String),
    /// The values parsed back from the `display` strings
    pub reparsed: (DegreeValue, DegreeValue),
    /// The absolute difference between the original and the re-parsed values
    pub drift: (f64, f64),
}

impl Conversion {
    fn reparse(
        notation: Notation,
        display: (String, String),
        original: (DegreeValue, DegreeValue),
    ) -> Result<Self, ParseError> {
        let reparsed = parse_pair_to_dd(&display.0, &display.1)?;
        let drift = (
            reparsed.0.drift(original.0),
            reparsed.1.drift(original.1),
        );
        Ok(Self {
            notation,
            display,
            reparsed,
            drift,
        })
    }

    /// Both display strings separated by a comma
    pub fn joined(&self) -> String {
        format!("{}, {}", self.display.0, self.display.1)
    }

    /// The re-parsed position as plain numbers
    pub fn position(&self) -> (f64, f64) {
        (self.reparsed.0.degrees(), self.reparsed.1.degrees())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lon) = self.position();
        write!(
            f,
            "{}: {} (Converted back: {lat:.8}, {lon:.8})",
            self.notation,
            self.joined()
        )
    }
}

/// The outcome of every format for a single sample
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    /// The original sample
    pub input: (DegreeValue, DegreeValue),
    /// Decimal degrees
    pub dd: Result<Conversion, ConversionError>,
    /// Degrees and decimal minutes
    pub dm: Result<Conversion, ConversionError>,
    /// Degrees, minutes and decimal seconds
    pub dms: Result<Conversion, ConversionError>,
}

impl RoundTripReport {
    /// The original sample with 5 decimals, e.g. `48.81666, -123.50887`
    pub fn input_display(&self) -> String {
        format!(
            "{:.5}, {:.5}",
            self.input.0.degrees(),
            self.input.1.degrees()
        )
    }

    /// The outcome of the given format
    pub const fn get(&self, notation: Notation) -> &Result<Conversion, ConversionError> {
        match notation {
            Notation::DecimalDegrees => &self.dd,
            Notation::DegreesMinutes => &self.dm,
            Notation::DegreesMinutesSeconds => &self.dms,
        }
    }

    /// The joined display strings of the format or the error placeholder
    pub fn display(&self, notation: Notation) -> String {
        match self.get(notation) {
            Ok(conversion) => conversion.joined(),
            Err(err) => err.to_string(),
        }
    }
}

fn convert_dd(lat: f64, lon: f64, precision: u8) -> Result<Conversion, ConversionError> {
    let original = parse_pair_to_dd(lat, lon)?;
    let display = format_dd_pair(original.0, original.1, precision)?;
    Ok(Conversion::reparse(
        Notation::DecimalDegrees,
        display,
        original,
    )?)
}

fn convert_sexagesimal<T: Sexagesimal>(
    notation: Notation,
    lat: f64,
    lon: f64,
    precision: u8,
) -> Result<Conversion, ConversionError> {
    let original = parse_pair_to_dd(lat, lon)?;
    let options = ConvertOptions::with_decimals(precision);
    let converted = (
        T::from_degree_value(original.0, options),
        T::from_degree_value(original.1, options),
    );
    let display = (
        converted.0.format(precision)?,
        converted.1.format(precision)?,
    );
    Ok(Conversion::reparse(notation, display, original)?)
}

fn logged(
    notation: Notation,
    result: Result<Conversion, ConversionError>,
) -> Result<Conversion, ConversionError> {
    match &result {
        Ok(conversion) => debug!(
            %notation,
            display = %conversion.joined(),
            lat_drift = conversion.drift.0,
            lon_drift = conversion.drift.1,
            "converted"
        ),
        Err(err) => warn!(%notation, error = ?err, "conversion failed"),
    }
    result
}

/// Validate the sample and run it through the DD, DM and DMS pipelines.
///
/// ```
/// use coordconv::{round_trip, Notation, PrecisionSettings};
///
/// let report = round_trip(48.816_662, -123.508_873, &PrecisionSettings::default()).unwrap();
/// assert_eq!(report.display(Notation::DecimalDegrees), "48.81666° N, 123.50887° W");
/// assert_eq!(report.input_display(), "48.81666, -123.50887");
/// ```
///
/// # Errors
/// The sample is out of bounds (or NaN); no format is processed then.
/// Failures inside a single format are reported in its own field of the report.
pub fn round_trip(
    lat: f64,
    lon: f64,
    settings: &PrecisionSettings,
) -> Result<RoundTripReport, ValidationError> {
    if !is_valid_coordinate(lat, lon) {
        warn!(lat, lon, "invalid coordinates");
        return Err(ValidationError { lat, lon });
    }

    let input = parse_pair_to_dd(lat, lon).map_err(|_| ValidationError { lat, lon })?;

    let dd = logged(Notation::DecimalDegrees, convert_dd(lat, lon, settings.dd()));
    let dm = logged(
        Notation::DegreesMinutes,
        convert_sexagesimal::<DegMin>(Notation::DegreesMinutes, lat, lon, settings.dm()),
    );
    let dms = logged(
        Notation::DegreesMinutesSeconds,
        convert_sexagesimal::<DegMinSec>(
            Notation::DegreesMinutesSeconds,
            lat,
            lon,
            settings.dms(),
        ),
    );

    Ok(RoundTripReport { input, dd, dm, dms })
}
