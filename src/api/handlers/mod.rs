//! HTTP request handlers for API endpoints.

pub mod convert;
pub mod health;
pub mod prices;

pub use convert::convert_handler;
pub use health::health_handler;
pub use prices::{price_handler, prices_handler};
