use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Allowance;

/// A request that failed validation. The messages are shown to API clients verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("totalIncome must be a positive number")]
    NegativeTotalIncome,

    #[error("wht must be a positive number")]
    NegativeWithholding,

    #[error("wht cannot be greater than totalIncome")]
    WithholdingExceedsIncome,
}

/// Inputs for a single taxpayer's calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    pub total_income: i64,
    pub withheld_tax: i64,
    pub allowances: Vec<Allowance>,
}

impl TaxCalculationRequest {
    /// Checks the request, reporting the first violation found.
    ///
    /// Income is checked before withholding, and both signs are checked
    /// before withholding is compared against income.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_income < 0 {
            return Err(ValidationError::NegativeTotalIncome);
        }
        if self.withheld_tax < 0 {
            return Err(ValidationError::NegativeWithholding);
        }
        if self.withheld_tax > self.total_income {
            return Err(ValidationError::WithholdingExceedsIncome);
        }
        Ok(())
    }
}

/// Tax owed on the slice of income that falls inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLevel {
    pub label: String,
    pub tax: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Donation deduction after capping.
    pub donation_deduction: i64,

    /// Income left after the personal allowance and donations, never negative.
    pub taxable_income: i64,

    /// Sum of every bracket's tax.
    pub total_tax: i64,

    /// Total tax minus withholding. Negative when withholding exceeds the liability.
    pub final_tax: i64,

    /// One entry per bracket in schedule order, including zero-tax brackets.
    pub levels: Vec<TaxLevel>,
}
