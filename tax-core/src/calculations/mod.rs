//! Personal income tax calculation.
//!
//! This module provides the calculation logic behind a tax calculation
//! request: allowance aggregation, the progressive bracket schedule, and the
//! worksheet that combines them into the final tax due.

pub mod allowances;
pub mod common;
pub mod income_tax;
pub mod progressive;

pub use allowances::deductible_donations;
pub use income_tax::{IncomeTaxError, IncomeTaxWorksheet};
pub use progressive::{BracketBreakdown, BracketError, ProgressiveTax};
