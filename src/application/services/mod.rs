//! Business logic services for the application layer.

pub mod converter_service;
pub mod currency_service;

pub use converter_service::ConverterService;
pub use currency_service::CurrencyService;
