//! Progressive bracket tax.
//!
//! Taxable income is allocated to brackets lowest first. Each bracket takes
//! as much of the remaining income as its inclusive width allows, and the
//! open-ended top bracket takes whatever is left. The tax on each slice is
//! truncated to a whole unit before it is added to the total.
//!
//! # Example
//!
//! ```
//! use tax_core::PERSONAL_INCOME_BRACKETS;
//! use tax_core::calculations::ProgressiveTax;
//!
//! let breakdown = ProgressiveTax::new(&PERSONAL_INCOME_BRACKETS)
//!     .calculate(440_000)
//!     .unwrap();
//!
//! // 289,999 units fall in the 10% bracket: 28,999.9 truncates to 28,999.
//! assert_eq!(breakdown.total_tax, 28_999);
//! assert_eq!(breakdown.levels.len(), 5);
//! assert_eq!(breakdown.levels[1].tax, 28_999);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{floor_at_zero, truncate_to_unit};
use crate::models::{TaxBracket, TaxLevel};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketError {
    /// No tax brackets were provided for the calculation.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// Tax on a bracket slice does not fit in a whole-unit amount.
    #[error("tax on {0} units in bracket {1} is out of range")]
    TaxOutOfRange(i64, &'static str),
}

/// Total tax and its per-bracket split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketBreakdown {
    pub total_tax: i64,
    pub levels: Vec<TaxLevel>,
}

/// Calculator over a fixed bracket schedule.
///
/// Brackets must be sorted by `min_income` ascending and contiguous. The last
/// bracket should have `max_income` of `None`; income beyond a bounded last
/// bracket is left untaxed.
#[derive(Debug, Clone)]
pub struct ProgressiveTax<'a> {
    tax_brackets: &'a [TaxBracket],
}

impl<'a> ProgressiveTax<'a> {
    pub fn new(tax_brackets: &'a [TaxBracket]) -> Self {
        Self { tax_brackets }
    }

    /// Splits `taxable_income` across the schedule.
    ///
    /// Every bracket produces a level, in schedule order, even when no income
    /// reaches it. Negative income is treated as zero.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError`] if:
    /// - No tax brackets were provided
    /// - A bracket's tax cannot be represented as an `i64`
    pub fn calculate(
        &self,
        taxable_income: i64,
    ) -> Result<BracketBreakdown, BracketError> {
        if self.tax_brackets.is_empty() {
            return Err(BracketError::NoTaxBrackets);
        }

        let mut remaining = floor_at_zero(taxable_income);
        let mut total_tax = 0;
        let mut levels = Vec::with_capacity(self.tax_brackets.len());

        for bracket in self.tax_brackets {
            let portion = match bracket.width() {
                Some(width) => remaining.min(width),
                None => remaining,
            };
            let tax = self.bracket_tax(bracket, portion)?;

            total_tax += tax;
            remaining -= portion;
            levels.push(TaxLevel {
                label: bracket.label.to_string(),
                tax,
            });
        }

        Ok(BracketBreakdown { total_tax, levels })
    }

    /// Tax on `portion` units at the bracket's marginal rate, fraction discarded.
    fn bracket_tax(
        &self,
        bracket: &TaxBracket,
        portion: i64,
    ) -> Result<i64, BracketError> {
        truncate_to_unit(Decimal::from(portion) * bracket.tax_rate)
            .ok_or(BracketError::TaxOutOfRange(portion, bracket.label))
    }
}

impl Default for ProgressiveTax<'static> {
    fn default() -> Self {
        Self::new(&crate::models::PERSONAL_INCOME_BRACKETS)
    }
}
