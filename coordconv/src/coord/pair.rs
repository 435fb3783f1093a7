//! Operations on the (latitude, longitude) pairs.
//! Both axes are processed independently with the same options.

use crate::angle::{
    dd::DegreeValue, dm::DegMin, dms::DegMinSec, ConvertOptions, FormatError, ParseError,
    Sexagesimal,
};

use super::{
    format::{format_dd, format_dm, format_dms},
    parse::{parse_to_degree_value, RawCoordinate},
    Axis,
};

/// Parse the latitude and the longitude with their own bounds.
///
/// # Errors
/// The first of the axes failed to parse.
pub fn parse_pair_to_dd<'a, 'b>(
    lat: impl Into<RawCoordinate<'a>>,
    lon: impl Into<RawCoordinate<'b>>,
) -> Result<(DegreeValue, DegreeValue), ParseError> {
    let lat = parse_to_degree_value(lat, Axis::Latitude)?;
    let lon = parse_to_degree_value(lon, Axis::Longitude)?;
    Ok((lat, lon))
}

/// Convert both axes into degrees and decimal minutes
pub fn dd_pair_to_dm(
    lat: DegreeValue,
    lon: DegreeValue,
    options: ConvertOptions,
) -> (DegMin, DegMin) {
    (
        DegMin::from_degree_value(lat, options),
        DegMin::from_degree_value(lon, options),
    )
}

/// Convert both axes into degrees, minutes and decimal seconds
pub fn dd_pair_to_dms(
    lat: DegreeValue,
    lon: DegreeValue,
    options: ConvertOptions,
) -> (DegMinSec, DegMinSec) {
    (
        DegMinSec::from_degree_value(lat, options),
        DegMinSec::from_degree_value(lon, options),
    )
}

/// Compose both axes back into decimal degrees
pub fn dm_pair_to_dd(lat: DegMin, lon: DegMin) -> (DegreeValue, DegreeValue) {
    (lat.to_degree_value(), lon.to_degree_value())
}

/// Compose both axes back into decimal degrees
pub fn dms_pair_to_dd(lat: DegMinSec, lon: DegMinSec) -> (DegreeValue, DegreeValue) {
    (lat.to_degree_value(), lon.to_degree_value())
}

/// Format both axes in decimal degrees.
/// Joining them is up to the caller.
///
/// # Errors
/// See [`format_dd`].
pub fn format_dd_pair(
    lat: DegreeValue,
    lon: DegreeValue,
    precision: u8,
) -> Result<(String, String), FormatError> {
    Ok((format_dd(lat, precision)?, format_dd(lon, precision)?))
}

/// Format both axes in degrees and decimal minutes
///
/// # Errors
/// See [`format_dm`].
pub fn format_dm_pair(
    lat: DegMin,
    lon: DegMin,
    precision: u8,
) -> Result<(String, String), FormatError> {
    Ok((format_dm(lat, precision)?, format_dm(lon, precision)?))
}

/// Format both axes in degrees, minutes and decimal seconds
///
/// # Errors
/// See [`format_dms`].
pub fn format_dms_pair(
    lat: DegMinSec,
    lon: DegMinSec,
    precision: u8,
) -> Result<(String, String), FormatError> {
    Ok((format_dms(lat, precision)?, format_dms(lon, precision)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::angle::OutOfRange;

    use super::*;

    const SALT_SPRING: (f64, f64) = (48.816_662, -123.508_873);

    #[test]
    fn parse_numbers() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();
        assert_eq!(lat.axis(), Axis::Latitude);
        assert_eq!(lon.axis(), Axis::Longitude);
        assert_eq!(lon.hemisphere(), 'W');
    }

    #[test]
    fn parse_mixed_notations() {
        let (lat, lon) = parse_pair_to_dd("48° 48.99972' N", "123° 30' 31.9428\" W").unwrap();
        assert!(lat.drift(DegreeValue::latitude(SALT_SPRING.0).unwrap()) < 1e-9);
        assert!(lon.drift(DegreeValue::longitude(SALT_SPRING.1).unwrap()) < 1e-9);
    }

    #[test]
    fn latitude_bound_is_not_longitude_bound() {
        assert!(parse_pair_to_dd(120.0, 0.0).is_err());
        assert!(parse_pair_to_dd(0.0, 120.0).is_ok());
    }

    #[test]
    fn any_failure_aborts_the_pair() {
        assert_eq!(
            parse_pair_to_dd(10.0, "181° E"),
            Err(ParseError::Range(OutOfRange::Longitude))
        );
        assert_eq!(
            parse_pair_to_dd("91", "not a number"),
            Err(ParseError::Range(OutOfRange::Latitude))
        );
    }

    #[test]
    fn dd_pair_format() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();
        assert_eq!(
            format_dd_pair(lat, lon, 5).unwrap(),
            ("48.81666° N".to_string(), "123.50887° W".to_string())
        );
    }

    #[test]
    fn dm_pair_format() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();
        let (lat, lon) = dd_pair_to_dm(lat, lon, ConvertOptions::with_decimals(3));
        assert_eq!(
            format_dm_pair(lat, lon, 3).unwrap(),
            ("48° 49.000' N".to_string(), "123° 30.532' W".to_string())
        );
    }

    #[test]
    fn dms_pair_format() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();
        let (lat, lon) = dd_pair_to_dms(lat, lon, ConvertOptions::with_decimals(1));
        assert_eq!(
            format_dms_pair(lat, lon, 1).unwrap(),
            ("48° 49' 0.0\" N".to_string(), "123° 30' 31.9\" W".to_string())
        );
    }

    #[test]
    fn back_to_dd_shows_drift() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();

        let (dm_lat, dm_lon) = dd_pair_to_dm(lat, lon, ConvertOptions::with_decimals(1));
        let (back_lat, back_lon) = dm_pair_to_dd(dm_lat, dm_lon);
        assert!(back_lat.drift(lat) > 0.0);
        assert!(back_lat.drift(lat) <= 0.05 / 60.0 + 1e-12);
        assert!(back_lon.drift(lon) <= 0.05 / 60.0 + 1e-12);

        let (dms_lat, dms_lon) = dd_pair_to_dms(lat, lon, ConvertOptions::with_decimals(1));
        let (back_lat, back_lon) = dms_pair_to_dd(dms_lat, dms_lon);
        assert!(back_lat.drift(lat) <= 0.05 / 3600.0 + 1e-12);
        assert!(back_lon.drift(lon) <= 0.05 / 3600.0 + 1e-12);
    }

    #[test]
    fn without_rounding_there_is_no_drift() {
        let (lat, lon) = parse_pair_to_dd(SALT_SPRING.0, SALT_SPRING.1).unwrap();
        let (dms_lat, dms_lon) = dd_pair_to_dms(lat, lon, ConvertOptions::full());
        let (back_lat, back_lon) = dms_pair_to_dd(dms_lat, dms_lon);
        assert!(back_lat.drift(lat) < 1e-12);
        assert!(back_lon.drift(lon) < 1e-12);
    }
}
