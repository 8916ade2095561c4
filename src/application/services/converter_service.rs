//! Currency conversion service.

use crate::domain::entities::ConversionResult;
use crate::domain::repositories::CurrencyRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Converts amounts between currencies through the Exalted Orb base unit.
///
/// Holds only a handle to the repository, so a single instance can be shared
/// across concurrent requests.
pub struct ConverterService<R: CurrencyRepository> {
    repository: Arc<R>,
}

impl<R: CurrencyRepository> ConverterService<R> {
    /// Creates a new converter service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Converts `amount` units of `from` into units of `to`.
    ///
    /// # Algorithm
    ///
    /// 1. `amount_in_base = amount * from.exalted_value`
    /// 2. `result = amount_in_base / to.exalted_value`
    /// 3. `exchange_rate = from.exalted_value / to.exalted_value`
    ///
    /// Converting a currency into itself yields `amount` and a rate of exactly 1.
    ///
    /// The source currency is resolved before the target; when both are
    /// missing only the source is reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `amount` is not a finite number above zero,
    /// or if the converted amount overflows or underflows `f64`.
    /// Returns [`AppError::NotFound`] naming the source or target currency that is missing.
    /// Returns [`AppError::Internal`] unchanged from the repository on store failures.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, AppError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(AppError::bad_request(
                "amount must be greater than 0",
                json!({"amount": amount.to_string()}),
            ));
        }

        let from_currency = self
            .repository
            .get_by_short_name(from)
            .await
            .map_err(|e| relabel_not_found(e, "Source", from))?;

        let to_currency = self
            .repository
            .get_by_short_name(to)
            .await
            .map_err(|e| relabel_not_found(e, "Target", to))?;

        debug_assert!(
            from_currency.has_valid_price() && to_currency.has_valid_price(),
            "stored prices must be positive"
        );

        let amount_in_base = amount * from_currency.exalted_value;
        // x * p / p can be off by one ulp; identity conversions return the amount as given.
        let result = if from_currency.short_name == to_currency.short_name {
            amount
        } else {
            amount_in_base / to_currency.exalted_value
        };
        let exchange_rate = from_currency.exalted_value / to_currency.exalted_value;

        if !(result.is_finite() && result > 0.0 && exchange_rate.is_finite()) {
            return Err(AppError::bad_request(
                "amount is out of range for this conversion",
                json!({
                    "amount": amount.to_string(),
                    "from": from_currency.short_name,
                    "to": to_currency.short_name,
                }),
            ));
        }

        tracing::debug!(
            from = %from_currency.short_name,
            to = %to_currency.short_name,
            amount,
            result,
            "Converted"
        );

        Ok(ConversionResult {
            from: from_currency.short_name,
            to: to_currency.short_name,
            amount,
            result,
            from_price: from_currency.exalted_value,
            to_price: to_currency.exalted_value,
            exchange_rate,
        })
    }
}

/// Rewrites a lookup miss so it names the side of the conversion that failed.
/// Any other error passes through untouched.
fn relabel_not_found(err: AppError, role: &str, short_name: &str) -> AppError {
    if err.is_not_found() {
        AppError::not_found(
            format!("{role} currency '{short_name}' not found"),
            json!({"currency": short_name, "role": role.to_lowercase()}),
        )
    } else {
        err
    }
}
