//! Currency price lookup service.

use crate::domain::entities::Currency;
use crate::domain::repositories::CurrencyRepository;
use crate::error::AppError;
use std::cmp::Ordering;
use std::sync::Arc;

/// Service exposing the price table to the HTTP and CLI surfaces.
pub struct CurrencyService<R: CurrencyRepository> {
    repository: Arc<R>,
}

impl<R: CurrencyRepository> CurrencyService<R> {
    /// Creates a new currency service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all currencies, most valuable first.
    ///
    /// Ties are broken by short name so the order is stable regardless of
    /// the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_prices(&self) -> Result<Vec<Currency>, AppError> {
        let mut currencies = self.repository.get_all().await?;
        currencies.sort_by(|a, b| {
            b.exalted_value
                .partial_cmp(&a.exalted_value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.short_name.cmp(&b.short_name))
        });
        Ok(currencies)
    }

    /// Retrieves a single currency by short name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the currency does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_price(&self, short_name: &str) -> Result<Currency, AppError> {
        self.repository.get_by_short_name(short_name).await
    }
}
