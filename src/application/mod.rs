//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::converter_service::ConverterService`] - Currency conversion through the base unit
//! - [`services::currency_service::CurrencyService`] - Price table listing and lookup

pub mod services;
