//! Monetary amount type
//!
//! Domain primitive for a whole-yen amount entered on the input screen.
//! All amounts are validated at construction time, ensuring invalid values
//! cannot reach the transport step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::number::parse_number;

/// Maximum allowed amount (100 billion yen)
pub const MAX_AMOUNT: i64 = 100_000_000_000;

/// MonetaryAmount represents a validated yen amount.
///
/// # Invariants
/// - Value is always positive (> 0)
/// - Value is a whole number of yen
/// - Maximum value is 100 billion yen
///
/// # Example
/// ```
/// use profit_mock::domain::MonetaryAmount;
///
/// let amount: MonetaryAmount = "500000".parse().unwrap();
/// assert_eq!(amount.yen(), 500_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MonetaryAmount(Decimal);

/// Why a raw value could not become a MonetaryAmount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Amount must be a whole number of yen (got {0})")]
    NotInteger(Decimal),

    #[error("Amount exceeds maximum allowed value ({MAX_AMOUNT})")]
    Overflow(Decimal),
}

impl MonetaryAmount {
    /// Create a new MonetaryAmount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    /// - `AmountError::NotInteger` if value has a fractional part
    /// - `AmountError::Overflow` if value > 100 billion
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        // Rule 1: Must be positive
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        // Rule 2: Whole yen only
        if !value.fract().is_zero() {
            return Err(AmountError::NotInteger(value));
        }

        // Rule 3: Maximum 100 billion yen
        if value > Decimal::from(MAX_AMOUNT) {
            return Err(AmountError::Overflow(value));
        }

        // "100.0" and "1e2" both normalise to scale 0
        Ok(Self(value.trunc()))
    }

    /// Create an amount from an integer number of yen.
    pub fn from_integer(value: i64) -> Result<Self, AmountError> {
        Self::new(Decimal::from(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whole yen as an integer.
    pub fn yen(&self) -> i64 {
        // scale is 0 and the value is bounded by MAX_AMOUNT
        self.0.mantissa() as i64
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MonetaryAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_number(s).ok_or_else(|| AmountError::NotANumber(s.to_string()))?;
        MonetaryAmount::new(value)
    }
}

impl TryFrom<i64> for MonetaryAmount {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MonetaryAmount::from_integer(value)
    }
}

impl From<MonetaryAmount> for i64 {
    fn from(amount: MonetaryAmount) -> Self {
        amount.yen()
    }
}
