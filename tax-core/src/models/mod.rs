mod allowance;
mod tax_bracket;
mod tax_calculation;

pub use allowance::{Allowance, AllowanceKind, DONATION_ALLOWANCE_CAP, PERSONAL_ALLOWANCE};
pub use tax_bracket::{PERSONAL_INCOME_BRACKETS, TaxBracket};
pub use tax_calculation::{TaxCalculationRequest, TaxCalculationResult, TaxLevel, ValidationError};
