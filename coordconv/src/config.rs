//! Precision of every output format, resolved from the raw user input.
//!
//! The rules are intentionally different for the formats:
//! - DD falls back to the default for anything non-numeric or not positive;
//! - DM and DMS fall back to the default for anything non-numeric or zero,
//!   but clamp the negative values to the minimum of 1 decimal.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{DEFAULT_PRECISION, MAX_DECIMALS};

/// Number of decimals in the last component of each format.
/// Latitude and longitude share the same precision.
///
/// Deserialized values follow the same rules as [`PrecisionSettings::from_fields`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "RawPrecisionSettings")
)]
pub struct PrecisionSettings {
    dd: u8,
    dm: u8,
    dms: u8,
}

/// The numbers as stored, before any fallback or clamping
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPrecisionSettings {
    dd: Option<i64>,
    dm: Option<i64>,
    dms: Option<i64>,
}

#[cfg(feature = "serde")]
impl From<RawPrecisionSettings> for PrecisionSettings {
    fn from(raw: RawPrecisionSettings) -> Self {
        Self {
            dd: dd_precision(raw.dd),
            dm: sexagesimal_precision(raw.dm),
            dms: sexagesimal_precision(raw.dms),
        }
    }
}

impl Default for PrecisionSettings {
    fn default() -> Self {
        Self {
            dd: DEFAULT_PRECISION,
            dm: DEFAULT_PRECISION,
            dms: DEFAULT_PRECISION,
        }
    }
}

impl PrecisionSettings {
    /// Construct from the numbers.
    /// Zero means "not set" and is replaced by the default.
    pub fn new(dd: u8, dm: u8, dms: u8) -> Self {
        Self {
            dd: dd_precision(Some(i64::from(dd))),
            dm: sexagesimal_precision(Some(i64::from(dm))),
            dms: sexagesimal_precision(Some(i64::from(dms))),
        }
    }

    /// Resolve the precision from the text fields as entered by a user.
    ///
    /// ```
    /// use coordconv::PrecisionSettings;
    ///
    /// let settings = PrecisionSettings::from_fields("-2", "-2", "abc");
    /// assert_eq!(settings.dd(), 5);
    /// assert_eq!(settings.dm(), 1);
    /// assert_eq!(settings.dms(), 5);
    /// ```
    pub fn from_fields(dd: &str, dm: &str, dms: &str) -> Self {
        Self {
            dd: dd_precision(leading_integer(dd)),
            dm: sexagesimal_precision(leading_integer(dm)),
            dms: sexagesimal_precision(leading_integer(dms)),
        }
    }

    /// Decimals of the degrees in DD
    pub const fn dd(&self) -> u8 {
        self.dd
    }

    /// Decimals of the minutes in DM
    pub const fn dm(&self) -> u8 {
        self.dm
    }

    /// Decimals of the seconds in DMS
    pub const fn dms(&self) -> u8 {
        self.dms
    }
}

/// The signed integer at the start of the field, the rest is ignored:
/// `" 7.9"` is 7, `"3px"` is 3, `"px"` has no value.
fn leading_integer(field: &str) -> Option<i64> {
    let field = field.trim_start();
    let (negative, unsigned) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }

    // only an overflow can fail here
    let value = unsigned[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

fn clamp_to_max(value: i64) -> u8 {
    u8::try_from(value.min(i64::from(MAX_DECIMALS))).unwrap_or(MAX_DECIMALS)
}

fn dd_precision(value: Option<i64>) -> u8 {
    match value {
        Some(value) if value > 0 => clamp_to_max(value),
        _ => DEFAULT_PRECISION,
    }
}

fn sexagesimal_precision(value: Option<i64>) -> u8 {
    match value {
        None | Some(0) => DEFAULT_PRECISION,
        Some(value) => clamp_to_max(value.max(1)),
    }
}
