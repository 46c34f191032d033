//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Rejection of the entry form.
///
/// Deliberately carries no field or reason: the user sees one fixed message
/// whichever input was wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("1〜100億円までの正の整数を入力してください")]
pub struct ValidationError;

impl ValidationError {
    /// Machine-readable code used by the JSON API
    pub fn code(&self) -> &'static str {
        "invalid_amount"
    }
}
