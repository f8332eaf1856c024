//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculation
//! steps, chiefly converting exact decimal tax back to whole currency units.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Drops any fractional currency unit, truncating toward zero.
///
/// Fractions are discarded, never rounded: 28,999.9 becomes 28,999.
///
/// # Returns
///
/// The whole-unit amount, or `None` if it does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::truncate_to_unit;
///
/// assert_eq!(truncate_to_unit(dec!(28999.9)), Some(28999));
/// assert_eq!(truncate_to_unit(dec!(-0.5)), Some(0));
/// assert_eq!(truncate_to_unit(dec!(150000)), Some(150000));
/// ```
pub fn truncate_to_unit(value: Decimal) -> Option<i64> {
    value.trunc().to_i64()
}

/// Clamps a negative amount up to zero.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(-60000), 0);
/// assert_eq!(floor_at_zero(440000), 440000);
/// ```
pub fn floor_at_zero(value: i64) -> i64 {
    value.max(0)
}
