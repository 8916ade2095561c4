//! DTOs for price lookup endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::Currency;

/// Price entry in the listing, keyed by short name in [`PriceListResponse`].
#[derive(Debug, Serialize)]
pub struct PriceEntry {
    pub name: String,
    pub exalted_value: f64,
    pub last_updated: DateTime<Utc>,
}

/// All prices as a JSON object keyed by short name.
pub type PriceListResponse = BTreeMap<String, PriceEntry>;

/// Single currency price.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub name: String,
    pub short_name: String,
    pub exalted_value: f64,
    pub last_updated: DateTime<Utc>,
}

impl From<Currency> for PriceResponse {
    fn from(c: Currency) -> Self {
        Self {
            name: c.name,
            short_name: c.short_name,
            exalted_value: c.exalted_value,
            last_updated: c.last_updated,
        }
    }
}

/// Builds the keyed listing from a list of currencies.
pub fn price_list(currencies: Vec<Currency>) -> PriceListResponse {
    currencies
        .into_iter()
        .map(|c| {
            (
                c.short_name,
                PriceEntry {
                    name: c.name,
                    exalted_value: c.exalted_value,
                    last_updated: c.last_updated,
                },
            )
        })
        .collect()
}
