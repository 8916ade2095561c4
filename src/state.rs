//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{ConverterService, CurrencyService};
use crate::infrastructure::persistence::SqliteCurrencyRepository;

#[derive(Clone)]
pub struct AppState {
    pub currency_service: Arc<CurrencyService<SqliteCurrencyRepository>>,
    pub converter_service: Arc<ConverterService<SqliteCurrencyRepository>>,
}

impl AppState {
    /// Wires both services to a single SQLite repository.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let repository = Arc::new(SqliteCurrencyRepository::new(pool));

        Self {
            currency_service: Arc::new(CurrencyService::new(repository.clone())),
            converter_service: Arc::new(ConverterService::new(repository)),
        }
    }
}
