//! Numeric helpers which are not linked to the domain

use std::ops::{Div, Rem};

use num_traits::ToPrimitive;

/// Division and remainder in one step
pub(crate) fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Round the value to the given number of decimal digits.
///
/// Halves are rounded away from zero.
pub(crate) fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Split a non-negative value into its whole part and the remaining fraction.
///
/// The whole part saturates at `u16::MAX`: callers only pass
/// magnitudes bounded by a coordinate axis.
pub(crate) fn whole_and_fraction(value: f64) -> (u16, f64) {
    let whole = value.trunc();
    let fraction = value - whole;
    (whole.to_u16().unwrap_or(u16::MAX), fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_mod() {
        assert_eq!(div_mod(15, 4), (3, 3));
        assert_eq!(div_mod(61_u16, 60), (1, 1));
        assert_eq!(div_mod(-100, 7), (-14, -2));
    }

    #[test]
    fn round_half_away_from_zero() {
        assert!((round_to(0.125, 2) - 0.13).abs() < f64::EPSILON);
        assert!((round_to(-1.5, 0) + 2.0).abs() < f64::EPSILON);
        assert!((round_to(2.5, 0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_to_decimals() {
        assert!((round_to(48.999_719_999_9, 5) - 48.999_72).abs() < 1e-12);
        assert!((round_to(123.508_873, 5) - 123.508_87).abs() < 1e-12);
    }

    #[test]
    fn round_up_to_full_minute() {
        assert!((round_to(59.996, 2) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn split_whole() {
        let (whole, fraction) = whole_and_fraction(48.75);
        assert_eq!(whole, 48);
        assert!((fraction - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn split_whole_zero() {
        assert_eq!(whole_and_fraction(0.0), (0, 0.0));
    }

    #[test]
    fn split_whole_saturates() {
        assert_eq!(whole_and_fraction(1e9).0, u16::MAX);
    }
}
