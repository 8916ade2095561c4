#![allow(dead_code)]

use path_trade_tools::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Opens a private in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

/// Replaces the seeded price table with exactly `prices`.
pub async fn reset_prices(pool: &SqlitePool, prices: &[(&str, &str, f64)]) {
    sqlx::query("DELETE FROM currencies")
        .execute(pool)
        .await
        .unwrap();

    for (short_name, name, value) in prices {
        insert_currency(pool, short_name, name, *value).await;
    }
}

pub async fn insert_currency(pool: &SqlitePool, short_name: &str, name: &str, value: f64) {
    sqlx::query("INSERT INTO currencies (name, short_name, exalted_value) VALUES (?1, ?2, ?3)")
        .bind(name)
        .bind(short_name)
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

/// Divine 400, Exalted 1, Chaos 0.5.
pub async fn standard_prices(pool: &SqlitePool) {
    reset_prices(
        pool,
        &[
            ("divine", "Divine Orb", 400.0),
            ("exalt", "Exalted Orb", 1.0),
            ("chaos", "Chaos Orb", 0.5),
        ],
    )
    .await;
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}
