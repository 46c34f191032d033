//! Profit summary
//!
//! Tolerant parsing of the transported amounts and their formatting as
//! signed yen strings. The transport channel is untrusted, so nothing in
//! this module can fail: missing or malformed values read as zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::number::parse_number;

/// Maximum fraction digits shown (ja-JP number formatting default)
const DISPLAY_SCALE: u32 = 3;

/// Currency unit appended to every figure
const YEN_SUFFIX: &str = "円";

/// Transported magnitudes above 10^27 are treated as malformed so the total
/// always fits in a Decimal.
fn transport_limit() -> Decimal {
    Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0)
}

/// Read a transported amount, defaulting to zero.
///
/// Negative and fractional values are kept as-is (rounded to the displayed
/// precision); anything unparsable becomes `0`.
pub fn parse_lenient(raw: Option<&str>) -> Decimal {
    raw.and_then(parse_number)
        .filter(|value| value.abs() <= transport_limit())
        .map(|value| {
            value
                .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        })
        .unwrap_or(Decimal::ZERO)
}

/// The three numbers behind the profit screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitFigures {
    pub cash: Decimal,
    pub credit: Decimal,
    pub total: Decimal,
}

impl ProfitFigures {
    pub fn new(cash: Decimal, credit: Decimal) -> Self {
        Self {
            cash,
            credit,
            // both sides are bounded by transport_limit()
            total: cash + credit,
        }
    }

    /// Build figures from raw transport values.
    pub fn from_raw(raw_cash: Option<&str>, raw_credit: Option<&str>) -> Self {
        Self::new(parse_lenient(raw_cash), parse_lenient(raw_credit))
    }

    /// Whether the total is shown as a gain (zero counts as a gain).
    pub fn is_gain(&self) -> bool {
        self.total >= Decimal::ZERO
    }
}

/// Display strings for the profit screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub cash_display: String,
    pub credit_display: String,
    pub total_display: String,
}

impl ProfitSummary {
    pub fn from_figures(figures: &ProfitFigures) -> Self {
        Self {
            cash_display: format_yen(figures.cash),
            credit_display: format_yen(figures.credit),
            total_display: format_yen(figures.total),
        }
    }
}

/// Format raw transport values into the three display strings.
///
/// Total: never fails, whatever the input.
pub fn format(raw_cash: Option<&str>, raw_credit: Option<&str>) -> ProfitSummary {
    ProfitSummary::from_figures(&ProfitFigures::from_raw(raw_cash, raw_credit))
}

/// Format a value as a signed, grouped yen string, e.g. `+1,234,567円`.
pub fn format_yen(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { '+' } else { '-' };
    let digits = value.abs().normalize().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    out.push(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out.push_str(YEN_SUFFIX);
    out
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
