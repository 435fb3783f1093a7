//! Locale-independent text representation of coordinates
//! with a fixed number of decimals in the last component.

use std::fmt;

use crate::{
    angle::{
        dd::DegreeValue, dm::DegMin, dms::DegMinSec, FormatError, Sexagesimal, ARC_MINUTE_SIGN,
        ARC_SECOND_SIGN, DEFAULT_PRECISION, DEGREE_SIGN, MAX_DECIMALS,
    },
    coord::Sign,
    utils::round_to,
};

fn check_precision(precision: u8) -> Result<usize, FormatError> {
    if precision > MAX_DECIMALS {
        return Err(FormatError::Precision(precision));
    }

    Ok(usize::from(precision))
}

/// Decimal degrees with the hemisphere suffix, e.g. `48.81666° N`
///
/// # Errors
/// The value is not finite or out of the axis bound,
/// or the precision is more than [`MAX_DECIMALS`].
pub fn format_dd(value: DegreeValue, precision: u8) -> Result<String, FormatError> {
    let width = check_precision(precision)?;
    if !value.degrees().is_finite() {
        return Err(FormatError::NotFinite);
    }

    let axis = value.axis();
    if !axis.contains(value.degrees()) {
        return Err(axis.out_of_range().into());
    }

    let magnitude = round_to(value.magnitude(), precision);
    let sign = if magnitude == 0.0 {
        Sign::Positive
    } else {
        value.sign()
    };
    Ok(format!(
        "{magnitude:.width$}{DEGREE_SIGN} {}",
        axis.hemisphere(sign)
    ))
}

/// Degrees and decimal minutes with the hemisphere suffix, e.g. `48° 48.99972' N`
///
/// The minutes are rounded before printing, so the full minute
/// is always carried into the degrees and `60` never appears.
///
/// # Errors
/// Some part is out of its range
/// or the precision is more than [`MAX_DECIMALS`].
pub fn format_dm(dm: DegMin, precision: u8) -> Result<String, FormatError> {
    let width = check_precision(precision)?;
    dm.check()?;

    let dm = dm.rounded(precision);
    Ok(format!(
        "{}{DEGREE_SIGN} {:.width$}{ARC_MINUTE_SIGN} {}",
        dm.degrees(),
        dm.minutes(),
        dm.hemisphere()
    ))
}

/// Degrees, minutes and decimal seconds with the hemisphere suffix,
/// e.g. `48° 48' 59.98320" N`
///
/// # Errors
/// Some part is out of its range
/// or the precision is more than [`MAX_DECIMALS`].
pub fn format_dms(dms: DegMinSec, precision: u8) -> Result<String, FormatError> {
    let width = check_precision(precision)?;
    dms.check()?;

    let dms = dms.rounded(precision);
    Ok(format!(
        "{}{DEGREE_SIGN} {}{ARC_MINUTE_SIGN} {:.width$}{ARC_SECOND_SIGN} {}",
        dms.degrees(),
        dms.minutes(),
        dms.seconds(),
        dms.hemisphere()
    ))
}

/// Take the precision from the formatter (`{:.3}`) or use the default one.
/// Anything above [`MAX_DECIMALS`] is printed with [`MAX_DECIMALS`].
fn write_with_precision<T>(
    f: &mut fmt::Formatter<'_>,
    value: T,
    format: fn(T, u8) -> Result<String, FormatError>,
) -> fmt::Result {
    let precision = f.precision().map_or(DEFAULT_PRECISION, |p| {
        u8::try_from(p).map_or(MAX_DECIMALS, |p| p.min(MAX_DECIMALS))
    });
    let s = format(value, precision).map_err(|_| fmt::Error)?;
    f.write_str(&s)
}

impl fmt::Display for DegreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_with_precision(f, *self, format_dd)
    }
}

impl fmt::Display for DegMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_with_precision(f, *self, format_dm)
    }
}

impl fmt::Display for DegMinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_with_precision(f, *self, format_dms)
    }
}
