//! Angular values of a single coordinate axis:
//! decimal degrees and their sexagesimal decompositions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod consts;
pub mod dd;
pub mod dm;
pub mod dms;
mod errors;

pub use consts::{DEFAULT_PRECISION, MAX_DECIMALS};
pub use errors::{FormatError, OutOfRange, ParseError};

pub(crate) use consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, HALF_TURN_DEG, MINUTES_IN_DEGREE,
    QUARTER_TURN_DEG, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
};

use self::dd::DegreeValue;

/// How to treat the smallest component while converting from decimal degrees
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertOptions {
    /// Round the smallest component to this number of decimals.
    /// `None` keeps the full precision.
    pub decimals: Option<u8>,
}

impl ConvertOptions {
    /// Keep the full floating point precision
    pub const fn full() -> Self {
        Self { decimals: None }
    }

    /// Round the smallest component to the given number of decimals
    pub const fn with_decimals(decimals: u8) -> Self {
        Self {
            decimals: Some(decimals),
        }
    }
}

/// Representation of an angle in sexagesimal (base 60) parts
/// where only the last part has the decimal fraction.
pub trait Sexagesimal: Copy {
    /// Decompose the decimal degrees.
    /// The conversion is total: every valid `DegreeValue` has a decomposition.
    fn from_degree_value(value: DegreeValue, options: ConvertOptions) -> Self;

    /// Compose the parts back into decimal degrees
    fn to_degree_value(self) -> DegreeValue;

    /// Round the last part to the given number of decimals.
    /// The overflow of a part carries into the next larger one,
    /// so that `59.996″` rounded to 2 decimals becomes `0.00″` of the next minute.
    #[must_use]
    fn rounded(self, decimals: u8) -> Self;

    /// Validate every part against its range
    ///
    /// # Errors
    /// The first part found out of range.
    fn check(self) -> Result<(), OutOfRange>;

    /// The display string with the given number of decimals in the last part
    ///
    /// # Errors
    /// When the parts are out of range or the precision is too big.
    fn format(self, precision: u8) -> Result<String, FormatError>;
}
