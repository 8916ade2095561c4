//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod currency_repository;

pub use currency_repository::CurrencyRepository;

#[cfg(test)]
pub use currency_repository::MockCurrencyRepository;
