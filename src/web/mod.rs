//! Web module
//!
//! The entry form and the mock profit screen, served as HTML.

pub mod render;

use std::collections::HashMap;

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::middleware::CorrelationId;
use crate::config::SharedConfig;
use crate::domain::{validate, ProfitFigures, ProfitSummary, PROFIT_PATH};
use render::{InputValues, ProfitView, StatusBar};

/// Entry form as submitted by the browser
#[derive(Debug, Default, Deserialize)]
pub struct InputForm {
    #[serde(default)]
    pub cash: String,
    #[serde(default)]
    pub credit: String,
}

/// Create the page router
pub fn create_router() -> Router<SharedConfig> {
    Router::new()
        .route("/", get(input_page).post(submit_input))
        .route(PROFIT_PATH, get(profit_page))
}

/// GET / - empty entry form
async fn input_page() -> Html<String> {
    Html(render::render_input_page(&InputValues::default(), None))
}

/// POST / - validate and hand the amounts to the profit screen
async fn submit_input(
    correlation: Option<Extension<CorrelationId>>,
    Form(form): Form<InputForm>,
) -> Response {
    let correlation_id = correlation.map(|Extension(id)| id.0);

    match validate(&form.cash, &form.credit) {
        Ok(amounts) => {
            tracing::debug!(
                cash = %amounts.cash,
                credit = %amounts.credit,
                correlation_id = ?correlation_id,
                "Amounts accepted"
            );
            Redirect::to(&amounts.profit_path()).into_response()
        }
        Err(err) => {
            tracing::debug!(correlation_id = ?correlation_id, "Entry form rejected");
            let values = InputValues {
                cash: form.cash,
                credit: form.credit,
            };
            let html = render::render_input_page(&values, Some(&err.to_string()));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
    }
}

/// GET /profit - mock realized profit/loss screen
async fn profit_page(
    State(config): State<SharedConfig>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let cash = params.get("cash").map(String::as_str);
    let credit = params.get("credit").map(String::as_str);

    let figures = ProfitFigures::from_raw(cash, credit);
    let now = Utc::now().with_timezone(&config.utc_offset);
    let view = ProfitView {
        figures,
        summary: ProfitSummary::from_figures(&figures),
        status_bar: StatusBar::new(&config, &now),
        today: now.date_naive(),
    };

    Html(render::render_profit_page(&view))
}
