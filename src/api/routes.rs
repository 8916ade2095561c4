//! API route configuration.

use crate::api::handlers::{convert_handler, health_handler, price_handler, prices_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. Every endpoint is public and read-only.
///
/// # Endpoints
///
/// - `GET /health`             - Health check
/// - `GET /prices`             - All prices keyed by short name
/// - `GET /prices/{currency}`  - Single currency price
/// - `GET /convert`            - Convert `amount` of `from` into `to`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/prices", get(prices_handler))
        .route("/prices/{currency}", get(price_handler))
        .route("/convert", get(convert_handler))
}
