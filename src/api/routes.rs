//! API Routes
//!
//! JSON endpoint definitions.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SharedConfig;
use crate::domain::{validate, MonetaryAmount, ProfitFigures, ProfitSummary};
use crate::error::{AppError, AppResult};

use super::middleware::CorrelationId;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub cash: String,
    #[serde(default)]
    pub credit: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub cash: MonetaryAmount,
    pub credit: MonetaryAmount,
    /// Where the entry screen navigates next
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfitResponse {
    #[serde(flatten)]
    pub summary: ProfitSummary,
    pub cash: Decimal,
    pub credit: Decimal,
    pub total: Decimal,
    pub is_gain: bool,
}

impl From<ProfitFigures> for ProfitResponse {
    fn from(figures: ProfitFigures) -> Self {
        Self {
            summary: ProfitSummary::from_figures(&figures),
            cash: figures.cash,
            credit: figures.credit,
            total: figures.total,
            is_gain: figures.is_gain(),
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedConfig> {
    Router::new()
        .route("/validate", post(validate_amounts))
        .route("/profit", get(get_profit))
}

// =========================================================================
// POST /validate
// =========================================================================

/// Strictly validate both amounts
async fn validate_amounts(
    correlation: Option<Extension<CorrelationId>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> AppResult<Json<ValidateResponse>> {
    let correlation_id = correlation.map(|Extension(id)| id.0);
    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let amounts = validate(&request.cash, &request.credit).map_err(|err| {
        tracing::debug!(correlation_id = ?correlation_id, "Validation request rejected");
        err
    })?;

    Ok(Json(ValidateResponse {
        cash: amounts.cash,
        credit: amounts.credit,
        location: amounts.profit_path(),
    }))
}

// =========================================================================
// GET /profit
// =========================================================================

/// Format the summary for whatever the query carries
async fn get_profit(Query(params): Query<HashMap<String, String>>) -> Json<ProfitResponse> {
    let figures = ProfitFigures::from_raw(
        params.get("cash").map(String::as_str),
        params.get("credit").map(String::as_str),
    );
    Json(figures.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_request_deserialize_defaults() {
        let request: ValidateRequest = serde_json::from_str(r#"{"cash": "500000"}"#).unwrap();
        assert_eq!(request.cash, "500000");
        assert_eq!(request.credit, "");
    }

    #[test]
    fn test_profit_response_serializes_flat() {
        let response = ProfitResponse::from(ProfitFigures::new(dec!(93890), dec!(396927)));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["cash_display"], "+93,890円");
        assert_eq!(json["credit_display"], "+396,927円");
        assert_eq!(json["total_display"], "+490,817円");
        assert_eq!(json["total"], "490817");
        assert_eq!(json["is_gain"], true);
    }
}
