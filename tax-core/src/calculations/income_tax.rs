//! Personal income tax worksheet.
//!
//! Turns a validated [`TaxCalculationRequest`] into the final tax due:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate income and withholding |
//! | 2    | Donation deduction (capped at 100,000) |
//! | 3    | Taxable income (income - 60,000 - donations, minimum 0) |
//! | 4    | Bracket tax and per-bracket levels |
//! | 5    | Final tax (bracket tax - withholding, may be negative) |
//!
//! # Example
//!
//! ```
//! use tax_core::{Allowance, TaxCalculationRequest};
//! use tax_core::calculations::IncomeTaxWorksheet;
//!
//! let request = TaxCalculationRequest {
//!     total_income: 500_000,
//!     withheld_tax: 25_000,
//!     allowances: vec![Allowance::new("donation", 200_000)],
//! };
//!
//! let result = IncomeTaxWorksheet::default().calculate(&request).unwrap();
//!
//! assert_eq!(result.donation_deduction, 100_000);
//! assert_eq!(result.taxable_income, 340_000);
//! assert_eq!(result.total_tax, 18_999);
//! assert_eq!(result.final_tax, -6_001);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::calculations::allowances::deductible_donations;
use crate::calculations::common::floor_at_zero;
use crate::calculations::progressive::{BracketError, ProgressiveTax};
use crate::models::{
    PERSONAL_ALLOWANCE, PERSONAL_INCOME_BRACKETS, TaxBracket, TaxCalculationRequest,
    TaxCalculationResult, ValidationError,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Bracket(#[from] BracketError),
}

#[derive(Debug, Clone)]
pub struct IncomeTaxWorksheet<'a> {
    brackets: ProgressiveTax<'a>,
}

impl<'a> IncomeTaxWorksheet<'a> {
    pub fn new(tax_brackets: &'a [TaxBracket]) -> Self {
        Self {
            brackets: ProgressiveTax::new(tax_brackets),
        }
    }

    /// Runs every step of the worksheet.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError::Invalid`] for the first validation failure,
    /// before anything is computed, and [`IncomeTaxError::Bracket`] if the
    /// schedule cannot be applied.
    pub fn calculate(
        &self,
        request: &TaxCalculationRequest,
    ) -> Result<TaxCalculationResult, IncomeTaxError> {
        request.validate()?;

        let donation_deduction = deductible_donations(&request.allowances);
        let taxable_income = self.taxable_income(request.total_income, donation_deduction);
        let breakdown = self.brackets.calculate(taxable_income)?;
        let final_tax = self.final_tax(breakdown.total_tax, request.withheld_tax);

        debug!(
            total_income = request.total_income,
            donation_deduction,
            taxable_income,
            total_tax = breakdown.total_tax,
            final_tax,
            "income tax calculated"
        );

        Ok(TaxCalculationResult {
            donation_deduction,
            taxable_income,
            total_tax: breakdown.total_tax,
            final_tax,
            levels: breakdown.levels,
        })
    }

    /// Income less the personal allowance and donations, never negative.
    fn taxable_income(
        &self,
        total_income: i64,
        donation_deduction: i64,
    ) -> i64 {
        floor_at_zero(
            total_income
                .saturating_sub(PERSONAL_ALLOWANCE)
                .saturating_sub(donation_deduction),
        )
    }

    /// Bracket tax minus withholding. Not floored: a negative value is a refund.
    fn final_tax(
        &self,
        total_tax: i64,
        withheld_tax: i64,
    ) -> i64 {
        total_tax.saturating_sub(withheld_tax)
    }
}

impl Default for IncomeTaxWorksheet<'static> {
    fn default() -> Self {
        Self::new(&PERSONAL_INCOME_BRACKETS)
    }
}
