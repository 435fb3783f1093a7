use std::{convert::TryFrom, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::{OutOfRange, ParseError, HALF_TURN_DEG, QUARTER_TURN_DEG};

pub use self::{
    format::{format_dd, format_dm, format_dms},
    pair::{
        dd_pair_to_dm, dd_pair_to_dms, dm_pair_to_dd, dms_pair_to_dd, format_dd_pair,
        format_dm_pair, format_dms_pair, parse_pair_to_dd,
    },
    parse::{parse_to_degree_value, Components, Notation, ParsedInput, RawCoordinate},
};

mod format;
mod pair;
mod parse;

/// Implements simple two variants enum associated with the boolean type
/// and a single character representation of every variant
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[doc = concat!("Represented by '", $true_ch, "'")]
            $truthy,
            #[doc = concat!("Represented by '", $false_ch, "'")]
            $falsy,
        }

        impl $name {
            /// The character representing the variant
            pub const fn symbol(self) -> char {
                match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    Self::$falsy => Self::$truthy,
                    Self::$truthy => Self::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        impl From<$name> for bool {
            fn from(val: $name) -> Self {
                val == $name::$truthy
            }
        }

        #[doc = concat!("The character does not represent any `", stringify!($name), "`")]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
        #[error("cannot parse {kind} from {failed:?}", kind = stringify!($name))]
        pub struct $parse_err {
            failed: char,
        }

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            /// Letters are case-insensitive
            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok(Self::$truthy),
                    $false_ch => Ok(Self::$falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

bool_enum!(
    /// The sign of a decimal degrees value
    Sign: Positive and Negative; parse from '+':'-' with ParseSignError
);

bool_enum!(
    /// The hemisphere of a latitude
    Pole: North and South; parse from 'N':'S' with ParsePoleError
);

bool_enum!(
    /// The hemisphere of a longitude
    RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError
);

/// The axis of a geographic coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// North-south position, `-90..=90` degrees
    Latitude,
    /// East-west position, `-180..=180` degrees
    Longitude,
}

impl Axis {
    /// The largest absolute value of degrees on the axis
    pub const fn bound(self) -> u16 {
        match self {
            Self::Latitude => QUARTER_TURN_DEG,
            Self::Longitude => HALF_TURN_DEG,
        }
    }

    /// Is the signed value of degrees within the axis bound?
    /// Never true for NaN.
    pub fn contains(self, degrees: f64) -> bool {
        degrees.abs() <= f64::from(self.bound())
    }

    pub(crate) const fn out_of_range(self) -> OutOfRange {
        match self {
            Self::Latitude => OutOfRange::Latitude,
            Self::Longitude => OutOfRange::Longitude,
        }
    }

    /// The hemisphere letter for the sign: N/S for latitude, E/W for longitude
    pub fn hemisphere(self, sign: Sign) -> char {
        let positive = bool::from(sign);
        match self {
            Self::Latitude => Pole::from(positive).symbol(),
            Self::Longitude => RotationalDirection::from(positive).symbol(),
        }
    }

    /// The sign denoted by the hemisphere letter
    pub(crate) fn sign_of_hemisphere(self, letter: char) -> Result<Sign, ParseError> {
        let positive = match self {
            Self::Latitude => Pole::try_from(letter).ok().map(bool::from),
            Self::Longitude => RotationalDirection::try_from(letter).ok().map(bool::from),
        };

        positive.map(Sign::from).ok_or(ParseError::WrongHemisphere {
            axis: self,
            letter: letter.to_ascii_uppercase(),
        })
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}
