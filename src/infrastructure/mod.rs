//! Infrastructure layer for external integrations.
//!
//! Implements the repository contracts defined by the domain layer.
//!
//! - [`persistence`] - SQLite and in-memory currency repositories

pub mod persistence;
