//! Domain entity representing a tradable currency.

use chrono::{DateTime, Utc};

/// A currency with its price expressed in the base unit (Exalted Orbs).
///
/// `short_name` is unique across the store and is the identifier used by
/// lookups and conversions. `exalted_value` is strictly positive for every
/// stored currency; the storage layer enforces this with a CHECK constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub exalted_value: f64,
    pub last_updated: DateTime<Utc>,
}

impl Currency {
    /// Creates a new Currency instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let divine = Currency::new(1, "Divine Orb".into(), "divine".into(), 400.0, Utc::now());
    /// ```
    pub fn new(
        id: i64,
        name: String,
        short_name: String,
        exalted_value: f64,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            short_name,
            exalted_value,
            last_updated,
        }
    }

    /// Returns true if the price can take part in a conversion.
    pub fn has_valid_price(&self) -> bool {
        self.exalted_value.is_finite() && self.exalted_value > 0.0
    }
}

/// Input data for inserting or updating a currency price.
#[derive(Debug, Clone)]
pub struct NewCurrency {
    pub name: String,
    pub short_name: String,
    pub exalted_value: f64,
}
