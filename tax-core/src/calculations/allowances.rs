//! Allowance aggregation.
//!
//! Only donations reduce taxable income at present. Other categories are
//! accepted on input and ignored here.

use crate::models::{Allowance, AllowanceKind, DONATION_ALLOWANCE_CAP};

/// Sums the donation allowances, capped at [`DONATION_ALLOWANCE_CAP`].
///
/// Each amount is clamped into `0..=DONATION_ALLOWANCE_CAP` before it is
/// added, so zero or negative donations never reduce the deduction, and the
/// running total never exceeds the cap.
///
/// # Examples
///
/// ```
/// use tax_core::Allowance;
/// use tax_core::calculations::deductible_donations;
///
/// let allowances = vec![
///     Allowance::new("donation", 80_000),
///     Allowance::new("DONATION ", 50_000),
///     Allowance::new("k-receipt", 20_000),
/// ];
///
/// assert_eq!(deductible_donations(&allowances), 100_000);
/// ```
pub fn deductible_donations(allowances: &[Allowance]) -> i64 {
    allowances
        .iter()
        .filter(|a| a.kind() == Some(AllowanceKind::Donation))
        .map(|a| a.amount.clamp(0, DONATION_ALLOWANCE_CAP))
        .fold(0, |total, amount| {
            (total + amount).min(DONATION_ALLOWANCE_CAP)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_allowances_deduct_nothing() {
        assert_eq!(deductible_donations(&[]), 0);
    }

    #[test]
    fn single_donation_below_cap_is_deducted_in_full() {
        let allowances = [Allowance::new("donation", 40_000)];

        assert_eq!(deductible_donations(&allowances), 40_000);
    }

    #[test]
    fn donations_are_summed() {
        let allowances = [
            Allowance::new("donation", 30_000),
            Allowance::new("donation", 20_000),
        ];

        assert_eq!(deductible_donations(&allowances), 50_000);
    }

    #[test]
    fn combined_donations_are_capped() {
        let allowances = [
            Allowance::new("donation", 80_000),
            Allowance::new("donation", 50_000),
        ];

        assert_eq!(deductible_donations(&allowances), 100_000);
    }

    #[test]
    fn single_oversized_donation_is_capped() {
        let allowances = [Allowance::new("donation", i64::MAX)];

        assert_eq!(deductible_donations(&allowances), DONATION_ALLOWANCE_CAP);
    }

    #[test]
    fn many_oversized_donations_do_not_overflow() {
        let allowances = vec![Allowance::new("donation", i64::MAX); 64];

        assert_eq!(deductible_donations(&allowances), DONATION_ALLOWANCE_CAP);
    }

    #[test]
    fn negative_and_zero_donations_are_ignored() {
        let allowances = [
            Allowance::new("donation", -50_000),
            Allowance::new("donation", 0),
            Allowance::new("donation", 10_000),
        ];

        assert_eq!(deductible_donations(&allowances), 10_000);
    }

    #[test]
    fn donation_type_matching_ignores_case_and_whitespace() {
        let allowances = [
            Allowance::new("Donation", 1_000),
            Allowance::new(" DONATION ", 2_000),
        ];

        assert_eq!(deductible_donations(&allowances), 3_000);
    }

    #[test]
    fn unrecognised_categories_are_ignored() {
        let allowances = [
            Allowance::new("k-receipt", 50_000),
            Allowance::new("", 50_000),
        ];

        assert_eq!(deductible_donations(&allowances), 0);
    }
}
