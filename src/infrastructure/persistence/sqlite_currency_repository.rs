//! SQLite implementation of the currency repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Currency, NewCurrency};
use crate::domain::repositories::CurrencyRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CurrencyRow {
    id: i64,
    name: String,
    short_name: String,
    exalted_value: f64,
    last_updated: DateTime<Utc>,
}

impl From<CurrencyRow> for Currency {
    fn from(r: CurrencyRow) -> Self {
        Currency::new(r.id, r.name, r.short_name, r.exalted_value, r.last_updated)
    }
}

/// SQLite repository backing the price table.
///
/// Lookups go through the [`CurrencyRepository`] trait. Price edits are
/// inherent methods used by the admin CLI only.
pub struct SqliteCurrencyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCurrencyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Inserts a currency or updates the price of an existing one.
    ///
    /// `last_updated` is set to the current time in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is not a finite number above zero.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn upsert(&self, new_currency: NewCurrency) -> Result<Currency, AppError> {
        if !(new_currency.exalted_value.is_finite() && new_currency.exalted_value > 0.0) {
            return Err(AppError::bad_request(
                "Price must be greater than 0",
                json!({"short_name": new_currency.short_name, "value": new_currency.exalted_value.to_string()}),
            ));
        }

        let row = sqlx::query_as::<_, CurrencyRow>(
            r#"
            INSERT INTO currencies (name, short_name, exalted_value, last_updated)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (short_name) DO UPDATE SET
                name          = excluded.name,
                exalted_value = excluded.exalted_value,
                last_updated  = excluded.last_updated
            RETURNING id, name, short_name, exalted_value, last_updated
            "#,
        )
        .bind(&new_currency.name)
        .bind(&new_currency.short_name)
        .bind(new_currency.exalted_value)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    /// Removes a currency from the price table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the currency does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, short_name: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM currencies WHERE short_name = ?1")
            .bind(short_name)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Currency not found",
                json!({"currency": short_name}),
            ));
        }

        Ok(())
    }

    /// Counts stored currencies.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM currencies")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl CurrencyRepository for SqliteCurrencyRepository {
    async fn get_all(&self) -> Result<Vec<Currency>, AppError> {
        let rows = sqlx::query_as::<_, CurrencyRow>(
            r#"
            SELECT id, name, short_name, exalted_value, last_updated
            FROM currencies
            ORDER BY exalted_value DESC, short_name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Currency::from).collect())
    }

    async fn get_by_short_name(&self, short_name: &str) -> Result<Currency, AppError> {
        let row = sqlx::query_as::<_, CurrencyRow>(
            r#"
            SELECT id, name, short_name, exalted_value, last_updated
            FROM currencies
            WHERE short_name = ?1
            "#,
        )
        .bind(short_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Currency::from).ok_or_else(|| {
            tracing::debug!(currency = short_name, "Currency lookup miss");
            AppError::not_found("Currency not found", json!({"currency": short_name}))
        })
    }
}
