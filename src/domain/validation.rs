//! Entry validation
//!
//! Strict, all-or-nothing check of the two amounts typed on the input
//! screen. Only amounts that pass here are put on the transport URL.

use serde::{Deserialize, Serialize};

use super::amount::{AmountError, MonetaryAmount};
use super::error::ValidationError;

/// Path of the profit screen
pub const PROFIT_PATH: &str = "/profit";

/// Both amounts after a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedAmounts {
    pub cash: MonetaryAmount,
    pub credit: MonetaryAmount,
}

impl ValidatedAmounts {
    /// Navigation target carrying both amounts as query parameters.
    pub fn profit_path(&self) -> String {
        format!("{}?credit={}&cash={}", PROFIT_PATH, self.credit, self.cash)
    }
}

/// Validate the raw cash and credit inputs.
///
/// Each input must be a whole number of yen between 1 and 100 billion.
/// Fails with the same `ValidationError` whichever field is wrong.
pub fn validate(raw_cash: &str, raw_credit: &str) -> Result<ValidatedAmounts, ValidationError> {
    let cash = raw_cash.parse::<MonetaryAmount>();
    let credit = raw_credit.parse::<MonetaryAmount>();

    match (cash, credit) {
        (Ok(cash), Ok(credit)) => Ok(ValidatedAmounts { cash, credit }),
        (cash, credit) => {
            for (field, reason) in rejection_reasons(&cash, &credit) {
                tracing::debug!(field, %reason, "Amount rejected");
            }
            Err(ValidationError)
        }
    }
}

/// Per-field reasons hidden behind the generic error
fn rejection_reasons<'a>(
    cash: &'a Result<MonetaryAmount, AmountError>,
    credit: &'a Result<MonetaryAmount, AmountError>,
) -> Vec<(&'static str, &'a AmountError)> {
    [("cash", cash), ("credit", credit)]
        .into_iter()
        .filter_map(|(field, result)| result.as_ref().err().map(|reason| (field, reason)))
        .collect()
}
