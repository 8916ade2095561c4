//! Data Transfer Objects for API requests and responses.
//!
//! Domain entities never reach the wire directly; handlers map them into
//! these Serde types.

pub mod convert;
pub mod health;
pub mod prices;
