mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use path_trade_tools::api::handlers::convert_handler;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/convert", get(convert_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn standard_server() -> TestServer {
    let pool = common::setup_pool().await;
    common::standard_prices(&pool).await;
    make_server(pool)
}

#[tokio::test]
async fn test_convert_divine_to_exalt() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=divine&to=exalt&amount=3").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["from"], "divine");
    assert_eq!(json["to"], "exalt");
    assert_eq!(json["amount"], 3.0);
    assert_eq!(json["result"], 1200.0);
    assert_eq!(json["from_price"], 400.0);
    assert_eq!(json["to_price"], 1.0);
    assert_eq!(json["exchange_rate"], 400.0);
}

#[tokio::test]
async fn test_convert_divine_to_chaos() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=divine&to=chaos&amount=3").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["result"], 2400.0);
}

#[tokio::test]
async fn test_convert_same_currency() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=chaos&to=chaos&amount=7.25").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["result"], 7.25);
    assert_eq!(json["exchange_rate"], 1.0);
}

#[tokio::test]
async fn test_convert_zero_amount() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=divine&to=chaos&amount=0").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_convert_non_numeric_amount() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=divine&to=chaos&amount=lots").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "Parameter 'amount' must be a valid number greater than 0"
    );
}

#[tokio::test]
async fn test_convert_missing_params() {
    let server = standard_server().await;

    let response = server.get("/api/convert?to=chaos&amount=1").await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "Parameters 'from' and 'to' are required"
    );

    let response = server.get("/api/convert?from=divine&to=chaos").await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Parameter 'amount' is required");
}

#[tokio::test]
async fn test_convert_unknown_source() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=unknown&to=chaos&amount=5").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["currency"], "unknown");
    assert_eq!(json["error"]["details"]["role"], "source");
}

#[tokio::test]
async fn test_convert_unknown_target() {
    let server = standard_server().await;

    let response = server.get("/api/convert?from=divine&to=nothing&amount=5").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["currency"], "nothing");
    assert_eq!(json["error"]["details"]["role"], "target");
}

#[tokio::test]
async fn test_convert_store_unavailable() {
    let pool = common::setup_pool().await;
    let server = make_server(pool.clone());
    pool.close().await;

    let response = server.get("/api/convert?from=divine&to=chaos&amount=1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_convert_overflowing_amount() {
    let pool = common::setup_pool().await;
    common::reset_prices(
        &pool,
        &[
            ("mirror", "Mirror of Kalandra", 60000.0),
            ("transmute", "Orb of Transmutation", 0.01),
        ],
    )
    .await;
    let server = make_server(pool);

    let response = server
        .get("/api/convert?from=mirror&to=transmute&amount=1e305")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        "amount is out of range for this conversion"
    );
}
