pub mod calculations;
pub mod models;

pub use calculations::{IncomeTaxError, IncomeTaxWorksheet};
pub use models::*;
