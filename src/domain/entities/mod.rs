//! Core domain entities.
//!
//! - [`Currency`] - A stored currency and its price in the base unit
//! - [`NewCurrency`] - Input for inserting or updating a price
//! - [`ConversionResult`] - Transient result of one conversion

pub mod conversion;
pub mod currency;

pub use conversion::ConversionResult;
pub use currency::{Currency, NewCurrency};
