//! Handlers for price lookup endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::prices::{PriceListResponse, PriceResponse, price_list};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every currency price keyed by short name.
///
/// # Endpoint
///
/// `GET /api/prices`
///
/// # Response
///
/// ```json
/// {
///   "divine": { "name": "Divine Orb", "exalted_value": 400.0, "last_updated": "..." },
///   "exalt":  { "name": "Exalted Orb", "exalted_value": 1.0, "last_updated": "..." }
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if the price table cannot be read.
pub async fn prices_handler(
    State(state): State<AppState>,
) -> Result<Json<PriceListResponse>, AppError> {
    let currencies = state.currency_service.list_prices().await?;

    Ok(Json(price_list(currencies)))
}

/// Returns a single currency price.
///
/// # Endpoint
///
/// `GET /api/prices/{currency}`
///
/// # Errors
///
/// Returns 404 if no currency has this short name (case-sensitive).
pub async fn price_handler(
    State(state): State<AppState>,
    Path(currency): Path<String>,
) -> Result<Json<PriceResponse>, AppError> {
    let currency = state.currency_service.get_price(&currency).await?;

    Ok(Json(currency.into()))
}
