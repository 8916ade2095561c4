//! DTOs for the conversion endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ConversionResult;

/// Query string of `GET /api/convert`.
///
/// Fields are kept as raw strings so the handler can report which one is
/// missing or malformed.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Conversion result returned to the client.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub from_price: f64,
    pub to_price: f64,
    pub exchange_rate: f64,
}

impl From<ConversionResult> for ConvertResponse {
    fn from(r: ConversionResult) -> Self {
        Self {
            from: r.from,
            to: r.to,
            amount: r.amount,
            result: r.result,
            from_price: r.from_price,
            to_price: r.to_price,
            exchange_rate: r.exchange_rate,
        }
    }
}
