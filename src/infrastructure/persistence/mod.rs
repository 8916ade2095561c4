//! Currency repository implementations.
//!
//! - [`SqliteCurrencyRepository`] - Persistent price table over SQLx/SQLite
//! - [`InMemoryCurrencyRepository`] - Immutable HashMap-backed fixture
//!
//! Pool setup and migrations live in [`pool`].

pub mod memory_currency_repository;
pub mod pool;
pub mod sqlite_currency_repository;

pub use memory_currency_repository::InMemoryCurrencyRepository;
pub use pool::{connect, run_migrations};
pub use sqlite_currency_repository::SqliteCurrencyRepository;
