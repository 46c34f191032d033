//! profit_mock Library
//!
//! A mock brokerage "realized profit/loss" screen built from two amounts,
//! showing how easily such screenshots can be faked.
//!
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
pub mod domain;
pub mod web;

mod error;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

pub use config::{Config, SharedConfig};
pub use error::{AppError, AppResult};
pub use domain::{format, validate, AmountError, MonetaryAmount, ProfitSummary, ValidationError};

/// Build the application router
pub fn build_router(config: SharedConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", axum::routing::get(health_check))
        // HTML screens
        .merge(web::create_router())
        // JSON API
        .nest("/api/v1", api::create_router())
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
