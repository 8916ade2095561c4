//! Repository trait for currency price lookups.

use crate::domain::entities::Currency;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the currency price table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCurrencyRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::InMemoryCurrencyRepository`] - HashMap fixture
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_currency.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    /// Returns every known currency. Order is implementation-defined.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_all(&self) -> Result<Vec<Currency>, AppError>;

    /// Finds a currency by exact, case-sensitive short name.
    ///
    /// Never succeeds without a currency: a miss is always reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no currency has this short name.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_short_name(&self, short_name: &str) -> Result<Currency, AppError>;
}
