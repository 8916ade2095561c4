//! In-memory implementation of the currency repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;

use crate::domain::entities::Currency;
use crate::domain::repositories::CurrencyRepository;
use crate::error::AppError;

/// Fixed price table held in a `HashMap` keyed by short name.
///
/// The table is built once and never mutated, so the repository can be
/// shared across tasks without locking.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCurrencyRepository {
    currencies: HashMap<String, Currency>,
}

impl InMemoryCurrencyRepository {
    /// Creates a repository from existing currency records.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
        Self {
            currencies: currencies
                .into_iter()
                .map(|c| (c.short_name.clone(), c))
                .collect(),
        }
    }

    /// Builds a repository from `(short_name, exalted_value)` pairs.
    ///
    /// Display names mirror the short name and ids follow insertion order.
    pub fn from_prices<'a>(prices: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let now = Utc::now();
        Self::new(prices.into_iter().enumerate().map(|(i, (short, value))| {
            Currency::new(i as i64 + 1, short.to_string(), short.to_string(), value, now)
        }))
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

#[async_trait]
impl CurrencyRepository for InMemoryCurrencyRepository {
    async fn get_all(&self) -> Result<Vec<Currency>, AppError> {
        Ok(self.currencies.values().cloned().collect())
    }

    async fn get_by_short_name(&self, short_name: &str) -> Result<Currency, AppError> {
        self.currencies
            .get(short_name)
            .cloned()
            .ok_or_else(|| AppError::not_found("Currency not found", json!({"currency": short_name})))
    }
}
