//! # Path Trade Tools
//!
//! Currency price API and converter for a game economy, built with Axum and SQLite.
//!
//! Every currency is priced in a single base unit (the Exalted Orb), so any
//! pair converts through two multiplications.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Currency entities and the repository trait
//! - **Application Layer** ([`application`]) - Conversion and price lookup services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data.db"   # Optional, this is the default
//! cargo run
//!
//! curl "http://localhost:8080/api/convert?from=divine&to=exalt&amount=3"
//! ```
//!
//! Migrations are embedded and applied at startup. Prices are edited with the
//! `admin` binary (`cargo run --bin admin -- price set divine 410`).
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ConverterService, CurrencyService};
    pub use crate::domain::entities::{ConversionResult, Currency, NewCurrency};
    pub use crate::domain::repositories::CurrencyRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemoryCurrencyRepository, SqliteCurrencyRepository,
    };
    pub use crate::state::AppState;
}
