//! Domain module
//!
//! Amount validation and profit formatting. Pure, no I/O.

pub mod amount;
pub mod error;
pub mod number;
pub mod summary;
pub mod validation;

pub use amount::{AmountError, MonetaryAmount, MAX_AMOUNT};
pub use error::ValidationError;
pub use summary::{format, format_yen, ProfitFigures, ProfitSummary};
pub use validation::{validate, ValidatedAmounts, PROFIT_PATH};
