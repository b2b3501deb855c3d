//! Asset values with precise decimal arithmetic
//!
//! This module provides a type-safe representation of declared asset values
//! using rust_decimal, so sums of partner values never pick up floating-point
//! drift before they are rounded for reporting.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Number of decimal places asset totals are reported with
pub const REPORTING_DECIMAL_PLACES: u32 = 2;

/// A declared asset value
///
/// Amounts keep their full precision while being accumulated; rounding happens
/// once, on the final total, through [`AssetValue::round_half_up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetValue(Decimal);

impl AssetValue {
    /// Creates a new asset value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a zero value
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds half-up to `dp` decimal places (0.125 becomes 0.13)
    ///
    /// Midpoints are rounded away from zero, which is half-up for the
    /// non-negative amounts partners declare.
    pub fn round_half_up(&self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds to the reporting precision of two decimal places
    pub fn round_for_reporting(&self) -> Self {
        self.round_half_up(REPORTING_DECIMAL_PLACES)
    }
}

impl From<Decimal> for AssetValue {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<AssetValue> for Decimal {
    fn from(value: AssetValue) -> Decimal {
        value.0
    }
}

impl fmt::Display for AssetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.dp$}", self.0, dp = REPORTING_DECIMAL_PLACES as usize)
    }
}

impl Add for AssetValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for AssetValue {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for AssetValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a AssetValue> for AssetValue {
    fn sum<I: Iterator<Item = &'a AssetValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_midpoint() {
        assert_eq!(AssetValue::new(dec!(0.125)).round_half_up(2).amount(), dec!(0.13));
        assert_eq!(AssetValue::new(dec!(1234.565)).round_for_reporting().amount(), dec!(1234.57));
    }

    #[test]
    fn test_round_half_up_below_midpoint() {
        assert_eq!(AssetValue::new(dec!(1234.564)).round_for_reporting().amount(), dec!(1234.56));
    }

    #[test]
    fn test_sum() {
        let values = [AssetValue::new(dec!(1.10)), AssetValue::new(dec!(2.20))];
        let total: AssetValue = values.iter().sum();
        assert_eq!(total.amount(), dec!(3.30));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(AssetValue::new(dec!(999457)).to_string(), "999457.00");
        assert_eq!(AssetValue::new(dec!(0.5)).to_string(), "0.50");
    }
}
